//! ServeGrid placement filters — decide which replicas may host a model.
//!
//! Filtering is the first stage of placement: every candidate server
//! replica is run through an ordered set of pure predicates and only the
//! replicas every predicate admits move on to scoring and binding (which
//! live outside this crate).
//!
//! # Components
//!
//! - **`capabilities`** — Requirement and capability tag sets
//! - **`filter`** — The `ReplicaFilter` contract and its input snapshots
//! - **`filters`** — Concrete rules (requirements, memory, draining)
//! - **`pipeline`** — Ordered filter composition and rejection reporting
//! - **`config`** — Pipeline configuration from TOML
//! - **`convert`** — Bridges from `servegrid-state` records

pub mod capabilities;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod filters;
pub mod pipeline;

pub use capabilities::{CapabilitySet, RequirementSet};
pub use config::{FilterKind, PlacementConfig};
pub use convert::{candidate_servers, workloads};
pub use error::{PlacementError, PlacementResult};
pub use filter::{CandidateServer, ReplicaFilter, Workload};
pub use filters::{AvailableMemoryFilter, DrainingFilter, RequirementsFilter};
pub use pipeline::{EvaluationMode, FilterOutcome, FilterPipeline, Rejection};
