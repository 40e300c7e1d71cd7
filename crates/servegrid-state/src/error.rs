//! Error types for the ServeGrid cluster snapshot.

use thiserror::Error;

/// Result type alias for snapshot operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while loading or querying a snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read snapshot: {0}")]
    Read(String),

    #[error("failed to parse snapshot: {0}")]
    Parse(String),

    #[error("duplicate {kind} key: {key}")]
    Duplicate { kind: &'static str, key: String },

    #[error("not found: {0}")]
    NotFound(String),
}
