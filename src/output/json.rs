//! JSON output formatting for setwise.

use serde::Serialize;
use serde_json::json;

use crate::error::SetwiseError;
use crate::workout::{Workout, WorkoutLibrary};

/// Format the workout library as JSON
///
/// # Errors
///
/// Returns `SetwiseError::Parse` if JSON serialization fails.
pub fn format_workouts_json(library: &WorkoutLibrary) -> Result<String, SetwiseError> {
    let items: Vec<_> = library
        .workouts
        .iter()
        .map(|w| {
            json!({
                "id": w.id,
                "name": w.name,
                "description": w.description,
                "sections": w.sections.len(),
                "exercises": w.exercise_count(),
                "estimated_seconds": w.estimated_seconds(),
            })
        })
        .collect();

    let output = json!({
        "count": items.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a workout plan as JSON
///
/// # Errors
///
/// Returns `SetwiseError::Parse` if JSON serialization fails.
pub fn format_plan_json(workout: &Workout) -> Result<String, SetwiseError> {
    let output = json!({
        "workout": workout,
        "total_exercises": workout.exercise_count(),
        "estimated_seconds": workout.estimated_seconds(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SetwiseError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SetwiseError> {
    Ok(serde_json::to_string_pretty(value)?)
}
