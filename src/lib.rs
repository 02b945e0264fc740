//! setwise - A terminal workout runner
//!
//! This crate provides the workout session state machine, the countdown timer
//! that drives timed sets and rests, and the CLI/TUI built on top of them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod tui;
pub mod workout;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SetwiseError;
pub use features::session::{Phase, Runner, SessionState, Transition, WorkoutSession};
pub use features::timer::{CountdownTimer, TimerStatus};
pub use workout::{Workout, WorkoutLibrary};
