//! Workout session state machine.
//!
//! Tracks where the user is in a workout: which section, exercise and set,
//! and whether they are working, resting, or done. Transitions that do not
//! apply to the current phase are ignored rather than reported as errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workout::{Exercise, Workout};

/// Phase of a workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not started yet
    Idle,
    /// Performing a set
    Exercising,
    /// Resting between sets
    Resting,
    /// Every set of every exercise is done
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Ready"),
            Self::Exercising => write!(f, "Exercising"),
            Self::Resting => write!(f, "Resting"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Mutable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current phase.
    pub phase: Phase,
    /// Zero-based section cursor.
    pub section_index: usize,
    /// Zero-based exercise cursor within the section.
    pub exercise_index: usize,
    /// One-based set number within the exercise.
    pub current_set: u32,
    /// Seconds to rest; only meaningful while resting.
    pub rest_duration: u32,
}

impl SessionState {
    /// The state every session starts from.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            phase: Phase::Idle,
            section_index: 0,
            exercise_index: 0,
            current_set: 1,
            rest_duration: 0,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// What a transition call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Idle to exercising.
    Started,
    /// Another set of the same exercise is next, after a rest.
    NextSet,
    /// The next exercise in the section is next, after a rest.
    NextExercise,
    /// The first exercise of the next section is next, after a rest.
    NextSection,
    /// The workout is complete.
    Finished,
    /// Rest is over; back to exercising.
    Resumed,
    /// State was reset to initial.
    Restarted,
    /// The call did not apply to the current state.
    Ignored,
}

impl Transition {
    /// Check if the call changed anything.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Progress counters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based section cursor.
    pub section_index: usize,
    /// Zero-based exercise cursor within the section.
    pub exercise_index: usize,
    /// One-based set number.
    pub current_set: u32,
    /// Number of exercises in the workout.
    pub total_exercises: usize,
    /// Exercises fully finished.
    pub completed_exercises: usize,
}

impl Progress {
    /// Fraction of exercises finished (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total_exercises == 0 {
            return 0.0;
        }
        self.completed_exercises as f64 / self.total_exercises as f64
    }
}

/// Everything the presentation layer reads after a transition.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Raw state.
    pub state: SessionState,
    /// Exercise under the cursor.
    pub current_exercise: Option<Exercise>,
    /// Name of the section under the cursor, empty if none.
    pub current_section_name: String,
    /// Countdown length for the current exercise, `None` for rep sets.
    pub current_timer_duration: Option<u32>,
    /// Progress counters.
    pub progress: Progress,
}

/// A workout session.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout: Workout,
    state: SessionState,
}

impl WorkoutSession {
    /// Create an idle session for a workout.
    #[must_use]
    pub const fn new(workout: Workout) -> Self {
        Self {
            workout,
            state: SessionState::initial(),
        }
    }

    /// The workout being run.
    #[must_use]
    pub const fn workout(&self) -> &Workout {
        &self.workout
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Begin the workout.
    pub fn start(&mut self) -> Transition {
        if self.state.phase != Phase::Idle {
            return Transition::Ignored;
        }

        self.state.phase = Phase::Exercising;
        tracing::info!(workout = %self.workout.id, "session started");
        Transition::Started
    }

    /// Finish the current set and move the cursor on.
    ///
    /// Checks, in order: more sets of this exercise, more exercises in this
    /// section, more sections. The first that applies moves the cursor and
    /// enters a rest; if none does, the workout is complete.
    pub fn complete_set(&mut self) -> Transition {
        if self.state.phase != Phase::Exercising {
            return Transition::Ignored;
        }

        let Some(exercise) = self.current_exercise() else {
            tracing::warn!(
                workout = %self.workout.id,
                section = self.state.section_index,
                exercise = self.state.exercise_index,
                "no exercise at the cursor, set cannot complete"
            );
            return Transition::Ignored;
        };
        let sets = exercise.sets();
        let rest = exercise.rest_after_set();

        let section_len = self.workout.sections[self.state.section_index]
            .exercises
            .len();
        let section_count = self.workout.sections.len();

        let transition = if self.state.current_set < sets {
            self.state.current_set += 1;
            Transition::NextSet
        } else if self.state.exercise_index + 1 < section_len {
            self.state.exercise_index += 1;
            self.state.current_set = 1;
            Transition::NextExercise
        } else if self.state.section_index + 1 < section_count {
            self.state.section_index += 1;
            self.state.exercise_index = 0;
            self.state.current_set = 1;
            Transition::NextSection
        } else {
            self.state.phase = Phase::Completed;
            tracing::info!(workout = %self.workout.id, "session completed");
            return Transition::Finished;
        };

        self.state.rest_duration = rest;
        self.state.phase = Phase::Resting;
        tracing::debug!(?transition, rest, state = ?self.state, "set completed");
        transition
    }

    /// End the rest and return to exercising.
    pub fn after_rest(&mut self) -> Transition {
        if self.state.phase != Phase::Resting {
            return Transition::Ignored;
        }

        self.state.phase = Phase::Exercising;
        Transition::Resumed
    }

    /// Throw away all progress.
    pub fn restart(&mut self) -> Transition {
        self.state = SessionState::initial();
        tracing::debug!(workout = %self.workout.id, "session restarted");
        Transition::Restarted
    }

    /// Exercise under the cursor.
    ///
    /// Still resolvable once completed; the cursor stays on the last exercise.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.workout
            .exercise_at(self.state.section_index, self.state.exercise_index)
    }

    /// Name of the section under the cursor, or "" if out of range.
    #[must_use]
    pub fn current_section_name(&self) -> &str {
        self.workout
            .sections
            .get(self.state.section_index)
            .map_or("", |s| s.name.as_str())
    }

    /// Countdown length for the current exercise; `None` means rep based.
    #[must_use]
    pub fn current_timer_duration(&self) -> Option<u32> {
        self.current_exercise().and_then(Exercise::timer_duration)
    }

    /// Number of exercises across every section.
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.workout.exercise_count()
    }

    /// Exercises fully finished.
    ///
    /// Counts exercises in earlier sections plus those before the cursor in
    /// the current one. Sets are not counted, so the last exercise only shows
    /// up once the session is completed.
    #[must_use]
    pub fn completed_exercises(&self) -> usize {
        if self.state.phase == Phase::Completed {
            return self.total_exercises();
        }

        let before: usize = self
            .workout
            .sections
            .iter()
            .take(self.state.section_index)
            .map(|s| s.exercises.len())
            .sum();
        before + self.state.exercise_index
    }

    /// Progress counters.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            section_index: self.state.section_index,
            exercise_index: self.state.exercise_index,
            current_set: self.state.current_set,
            total_exercises: self.total_exercises(),
            completed_exercises: self.completed_exercises(),
        }
    }

    /// State plus every derived view.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            current_exercise: self.current_exercise().cloned(),
            current_section_name: self.current_section_name().to_string(),
            current_timer_duration: self.current_timer_duration(),
            progress: self.progress(),
        }
    }
}
