//! Output formatting for setwise.
//!
//! This module provides formatters for displaying workouts in various formats.

mod json;
mod pretty;
pub mod theme;

use crate::cli::args::OutputFormat;
use crate::error::SetwiseError;
use crate::workout::{Workout, WorkoutLibrary};

pub use json::*;
pub use pretty::*;

/// Format the workout library based on output format
///
/// # Errors
///
/// Returns `SetwiseError::Parse` if JSON serialization fails.
pub fn format_workouts(
    library: &WorkoutLibrary,
    format: OutputFormat,
) -> Result<String, SetwiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_workouts_pretty(library)),
        OutputFormat::Json => format_workouts_json(library),
    }
}

/// Format a workout plan based on output format
///
/// # Errors
///
/// Returns `SetwiseError::Parse` if JSON serialization fails.
pub fn format_plan(workout: &Workout, format: OutputFormat) -> Result<String, SetwiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(workout)),
        OutputFormat::Json => format_plan_json(workout),
    }
}
