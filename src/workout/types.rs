//! Workout definition types.
//!
//! These mirror the JSON workout library format. A workout is an ordered list
//! of sections, each holding an ordered list of exercises. Exercises are
//! either timed (a countdown per set) or rep based (the user taps through).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete workout definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Stable identifier used on the command line.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sections in the order they are performed.
    pub sections: Vec<Section>,
}

impl Workout {
    /// Total number of exercises across every section.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.sections.iter().map(|s| s.exercises.len()).sum()
    }

    /// Look up the exercise at a section/exercise cursor.
    #[must_use]
    pub fn exercise_at(&self, section_index: usize, exercise_index: usize) -> Option<&Exercise> {
        self.sections
            .get(section_index)
            .and_then(|s| s.exercises.get(exercise_index))
    }

    /// Lower bound on the workout length in seconds.
    ///
    /// Counts timed work and every rest interval except the one after the
    /// final set. Rep-based sets contribute nothing since their length is
    /// up to the user.
    #[must_use]
    pub fn estimated_seconds(&self) -> u64 {
        let exercises: Vec<&Exercise> = self.sections.iter().flat_map(|s| &s.exercises).collect();
        let last = exercises.len().saturating_sub(1);

        exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let sets = u64::from(exercise.sets());
                let rest = u64::from(exercise.rest_after_set());
                let work = match exercise {
                    Exercise::Timer(timed) => sets * u64::from(timed.duration.resolve()),
                    Exercise::Reps(_) => 0,
                };
                let rests = if i == last { sets.saturating_sub(1) } else { sets };
                work + rests * rest
            })
            .sum()
    }
}

/// A named group of exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier.
    pub id: String,
    /// Display name (e.g. "Warm-up").
    pub name: String,
    /// Exercises in order.
    pub exercises: Vec<Exercise>,
}

/// A single exercise, either timed or rep based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Exercise {
    /// Each set runs a countdown.
    Timer(TimedExercise),
    /// Each set is a number of repetitions, finished manually.
    Reps(RepsExercise),
}

impl Exercise {
    /// Shared fields common to both exercise kinds.
    #[must_use]
    pub const fn info(&self) -> &ExerciseInfo {
        match self {
            Self::Timer(e) => &e.info,
            Self::Reps(e) => &e.info,
        }
    }

    /// Exercise identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.info().id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Number of sets.
    #[must_use]
    pub const fn sets(&self) -> u32 {
        self.info().sets
    }

    /// Rest in seconds after each set.
    #[must_use]
    pub const fn rest_after_set(&self) -> u32 {
        self.info().rest_after_set
    }

    /// Countdown length for one set, or `None` for rep-based exercises.
    #[must_use]
    pub const fn timer_duration(&self) -> Option<u32> {
        match self {
            Self::Timer(e) => Some(e.duration.resolve()),
            Self::Reps(_) => None,
        }
    }

    /// Short description of the work per set, e.g. "45s" or "8-12 reps".
    #[must_use]
    pub fn target_label(&self) -> String {
        match self {
            Self::Timer(e) => format!("{}s", e.duration),
            Self::Reps(e) => format!("{} reps", e.reps),
        }
    }
}

/// Fields shared by every exercise kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    /// Exercise identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description of the movement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional coaching tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Number of sets (at least one).
    pub sets: u32,
    /// Rest in seconds after each set.
    #[serde(default)]
    pub rest_after_set: u32,
}

/// A timed exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedExercise {
    #[serde(flatten)]
    pub info: ExerciseInfo,
    /// Seconds per set.
    pub duration: Amount,
}

/// A rep-based exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepsExercise {
    #[serde(flatten)]
    pub info: ExerciseInfo,
    /// Repetitions per set.
    pub reps: Amount,
}

/// A fixed count or an inclusive range.
///
/// Serialized untagged: `30` or `{"min": 8, "max": 12}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A single value.
    Fixed(u32),
    /// A range; `min` is expected to be at most `max`.
    Range { min: u32, max: u32 },
}

impl Amount {
    /// Collapse to one representative value.
    ///
    /// Ranges resolve to their midpoint with halves rounded up, so
    /// `{40, 60}` gives 50 and `{5, 6}` gives 6.
    #[must_use]
    pub const fn resolve(self) -> u32 {
        match self {
            Self::Fixed(n) => n,
            // The midpoint of two u32s always fits back into a u32.
            #[allow(clippy::cast_possible_truncation)]
            Self::Range { min, max } => (min as u64 + max as u64).div_ceil(2) as u32,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}
