//! Command-line interface for setwise.

pub mod args;
pub mod commands;
