//! Run command implementation.

use crate::cli::commands::Context;
use crate::error::SetwiseError;

/// Run a workout in the interactive runner.
///
/// # Errors
///
/// Returns an error if the workout cannot be found or the terminal fails.
pub fn run(ctx: &Context, workout: Option<&str>) -> Result<String, SetwiseError> {
    let library = ctx.library()?;
    let workout = ctx.select(&library, workout)?.clone();

    tracing::info!(workout = %workout.id, "opening runner");
    crate::tui::run(workout, &ctx.config.runner)?;

    Ok(String::new())
}
