//! Workout definitions and the workout library.

mod library;
pub mod types;

pub use library::WorkoutLibrary;
pub use types::{Amount, Exercise, ExerciseInfo, RepsExercise, Section, TimedExercise, Workout};
