//! Error types for setwise.

use thiserror::Error;

/// Errors surfaced by the outer layers (config, library loading, CLI, TUI).
///
/// The session state machine and countdown timer never produce errors; invalid
/// calls into them are no-ops.
#[derive(Debug, Error)]
pub enum SetwiseError {
    /// Configuration could not be read, written, or resolved.
    #[error("config error: {0}")]
    Config(String),

    /// A workout or other named item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON could not be parsed or produced.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(String),
}
