//! The placement filter contract.
//!
//! A filter looks at one (workload, candidate replica) pair and answers
//! admit or reject. Filters are pure: they read two immutable snapshots,
//! touch no shared mutable state, and return the same answer for the same
//! pair no matter when or on which thread they run. New placement rules
//! are new `ReplicaFilter` implementations.

use servegrid_state::{ModelVersion, ServerReplica};

use crate::capabilities::{CapabilitySet, RequirementSet};

/// A model version under placement, with its requirements normalized.
#[derive(Debug, Clone)]
pub struct Workload<'a> {
    model: &'a ModelVersion,
    requirements: RequirementSet,
}

impl<'a> Workload<'a> {
    pub fn new(model: &'a ModelVersion) -> Self {
        Self {
            model,
            requirements: RequirementSet::from(model),
        }
    }

    pub fn model(&self) -> &'a ModelVersion {
        self.model
    }

    pub fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }
}

/// A server replica considered for placement, carrying its capability index.
///
/// The index is built once here and shared by every filter call against
/// this replica.
#[derive(Debug, Clone)]
pub struct CandidateServer<'a> {
    replica: &'a ServerReplica,
    capabilities: CapabilitySet,
    key: String,
}

impl<'a> CandidateServer<'a> {
    pub fn new(replica: &'a ServerReplica) -> Self {
        Self {
            replica,
            capabilities: CapabilitySet::from(replica),
            key: replica.key(),
        }
    }

    pub fn replica(&self) -> &'a ServerReplica {
        self.replica
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// `{server}:{index}` key of the underlying replica.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A single placement rule.
///
/// Implementations must be side-effect free. `filter` is the contract;
/// `describe` only feeds logs and rejection reports.
pub trait ReplicaFilter: Send + Sync {
    /// Stable identifier, used in config and rejection reports.
    fn name(&self) -> &'static str;

    /// Whether `server` is eligible to host `workload` under this rule.
    fn filter(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> bool;

    /// Human-readable detail of the inputs this rule looked at.
    fn describe(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> String;
}
