//! Workout library loading.
//!
//! A library is a JSON document of the form `{"workouts": [...]}`. The bundled
//! library is compiled into the binary; a user library can be loaded from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SetwiseError;
use crate::workout::types::Workout;

const BUNDLED: &str = include_str!("../../data/workouts.json");

/// A collection of workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutLibrary {
    /// Workouts in file order.
    pub workouts: Vec<Workout>,
}

impl WorkoutLibrary {
    /// The library shipped with setwise.
    ///
    /// # Errors
    ///
    /// Returns `SetwiseError::Parse` if the bundled JSON is malformed.
    pub fn bundled() -> Result<Self, SetwiseError> {
        Self::from_json(BUNDLED)
    }

    /// Parse a library from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SetwiseError::Parse` if the JSON does not match the format.
    pub fn from_json(json: &str) -> Result<Self, SetwiseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a library from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, SetwiseError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SetwiseError::Config(format!(
                "Failed to read workout file {}: {e}",
                path.display()
            ))
        })?;

        let library = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            count = library.workouts.len(),
            "loaded workout library"
        );
        Ok(library)
    }

    /// Load from `path` if given, otherwise use the bundled library.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, SetwiseError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::bundled(),
        }
    }

    /// Find a workout by id, falling back to a case-insensitive name match.
    ///
    /// # Errors
    ///
    /// Returns `SetwiseError::NotFound` if nothing matches.
    pub fn find(&self, key: &str) -> Result<&Workout, SetwiseError> {
        self.workouts
            .iter()
            .find(|w| w.id == key)
            .or_else(|| {
                self.workouts
                    .iter()
                    .find(|w| w.name.eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| SetwiseError::NotFound(format!("No workout named '{key}'")))
    }

    /// Check if the library has no workouts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::types::Exercise;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_library_parses() {
        let library = WorkoutLibrary::bundled().unwrap();
        assert!(!library.is_empty());

        for workout in &library.workouts {
            assert!(!workout.sections.is_empty(), "{} has no sections", workout.id);
            for section in &workout.sections {
                assert!(!section.exercises.is_empty());
                assert!(section.exercises.iter().all(|e| e.sets() >= 1));
            }
        }
    }

    #[test]
    fn test_find_by_id_and_name() {
        let library = WorkoutLibrary::from_json(
            r#"{"workouts": [
                {"id": "core", "name": "Core Blast", "sections": []},
                {"id": "legs", "name": "Leg Day", "sections": []}
            ]}"#,
        )
        .unwrap();

        assert_eq!(library.find("legs").unwrap().name, "Leg Day");
        assert_eq!(library.find("core blast").unwrap().id, "core");
        assert!(matches!(
            library.find("arms"),
            Err(SetwiseError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workouts.json");
        std::fs::write(
            &path,
            r#"{"workouts": [{"id": "w", "name": "W", "sections": [
                {"id": "s", "name": "S", "exercises": [
                    {"type": "timer", "id": "e", "name": "E", "sets": 2,
                     "restAfterSet": 5, "duration": 10}
                ]}
            ]}]}"#,
        )
        .unwrap();

        let library = WorkoutLibrary::load(Some(&path)).unwrap();
        let workout = library.find("w").unwrap();

        assert!(matches!(workout.exercise_at(0, 0), Some(Exercise::Timer(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(
            WorkoutLibrary::load_from_path(&path),
            Err(SetwiseError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            WorkoutLibrary::from_json("{\"workouts\": 3}"),
            Err(SetwiseError::Parse(_))
        ));
    }
}
