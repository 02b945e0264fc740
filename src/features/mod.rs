//! Feature implementations for setwise.
//!
//! - Workout sessions and the phase runner
//! - Countdown timers

pub mod session;
pub mod timer;
