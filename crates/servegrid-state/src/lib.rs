//! servegrid-state — read-only cluster snapshot for ServeGrid placement.
//!
//! Holds the two aggregates the placement filters read: model versions
//! (with their required capability tags) and server replicas (with their
//! advertised capability tags and memory accounting).
//!
//! # Architecture
//!
//! A [`ClusterSnapshot`] is a fully materialized, immutable view loaded
//! from a TOML or JSON document. Keys follow `{name}:{version}` for model
//! versions and `{server}:{index}` for replicas. Nothing in this crate
//! mutates a snapshot after it has been loaded, so a snapshot can be
//! shared freely across threads.

pub mod error;
pub mod snapshot;
pub mod types;

pub use error::{StateError, StateResult};
pub use snapshot::ClusterSnapshot;
pub use types::*;
