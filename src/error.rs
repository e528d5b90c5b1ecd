//! Error types for focal.

use thiserror::Error;

use crate::timer::Phase;

/// Errors that can occur in focal.
#[derive(Debug, Error)]
pub enum FocalError {
    /// An operation was called in a phase that does not allow it.
    #[error("cannot {operation} while the timer is {phase}")]
    InvalidTimerState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the timer was in.
        phase: Phase,
    },

    /// A session was configured with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A session store write or read failed.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FocalError {
    /// Shorthand for an invalid-phase transition error.
    #[must_use]
    pub const fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        Self::InvalidTimerState { operation, phase }
    }
}
