//! Command implementations for setwise.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod run;

pub use config::config;
pub use run::run;

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::SetwiseError;
use crate::output::{format_plan, format_workouts};
use crate::workout::{Workout, WorkoutLibrary};

/// Settings resolved from the command line and config file.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: Config,
    /// Output format.
    pub format: OutputFormat,
    /// Workout library file, if not using the bundled one.
    pub workouts_file: Option<PathBuf>,
}

impl Context {
    /// Resolve command-line overrides against the config.
    #[must_use]
    pub fn new(config: Config, output: Option<OutputFormat>, workouts: Option<PathBuf>) -> Self {
        let format = output.unwrap_or(config.general.default_output);
        let workouts_file = workouts.or_else(|| config.workouts.file.clone());
        Self {
            config,
            format,
            workouts_file,
        }
    }

    /// Load the workout library.
    ///
    /// # Errors
    ///
    /// Returns an error if the library file cannot be read or parsed.
    pub fn library(&self) -> Result<WorkoutLibrary, SetwiseError> {
        WorkoutLibrary::load(self.workouts_file.as_deref())
    }

    /// Pick a workout by name, falling back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns `SetwiseError::NotFound` if no name is available or nothing
    /// matches.
    pub fn select<'a>(
        &self,
        library: &'a WorkoutLibrary,
        name: Option<&str>,
    ) -> Result<&'a Workout, SetwiseError> {
        let key = name
            .or(self.config.workouts.default.as_deref())
            .ok_or_else(|| {
                SetwiseError::NotFound(
                    "No workout given and workouts.default is not set. Run 'setwise list' to see workouts."
                        .to_string(),
                )
            })?;
        library.find(key)
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the library cannot be loaded or output formatting fails.
pub fn list(ctx: &Context) -> Result<String, SetwiseError> {
    let library = ctx.library()?;
    format_workouts(&library, ctx.format)
}

/// Execute plan command
///
/// # Errors
///
/// Returns an error if the workout cannot be found or output formatting fails.
pub fn plan(ctx: &Context, workout: Option<&str>) -> Result<String, SetwiseError> {
    let library = ctx.library()?;
    let workout = ctx.select(&library, workout)?;
    format_plan(workout, ctx.format)
}

/// Generate shell completions
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buffer = Vec::new();
    clap_complete::generate(shell, &mut cmd, "setwise", &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
