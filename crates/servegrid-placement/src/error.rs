//! Placement error types.
//!
//! Filters never fail; these cover loading and building a pipeline.

use thiserror::Error;

/// Errors that can occur while configuring placement.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("invalid placement config: {0}")]
    Config(String),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
