//! Configuration management for setwise.
//!
//! This module handles loading and saving configuration from `~/.setwise/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, RunnerConfig, WorkoutsConfig};
