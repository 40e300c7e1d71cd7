//! Draining rule.

use crate::filter::{CandidateServer, ReplicaFilter, Workload};

/// Rejects replicas that are being drained ahead of removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrainingFilter;

impl ReplicaFilter for DrainingFilter {
    fn name(&self) -> &'static str {
        "draining"
    }

    fn filter(&self, _workload: &Workload<'_>, server: &CandidateServer<'_>) -> bool {
        !server.replica().draining
    }

    fn describe(&self, _workload: &Workload<'_>, server: &CandidateServer<'_>) -> String {
        format!("replica draining {}", server.replica().draining)
    }
}
