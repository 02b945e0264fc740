//! Workout sessions.
//!
//! Provides the session state machine and the runner that pairs it with a
//! countdown per timed phase:
//! - Start, complete sets, rest, restart
//! - Section/exercise/set cursors and progress counters
//! - Automatic advance when a countdown finishes

mod machine;
mod runner;

pub use machine::{Phase, Progress, SessionSnapshot, SessionState, Transition, WorkoutSession};
pub use runner::{Runner, RunnerEvent, RunnerOptions, TimedPhase};
