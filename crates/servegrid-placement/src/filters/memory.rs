//! Memory fit rule.

use crate::filter::{CandidateServer, ReplicaFilter, Workload};

/// Admits a replica iff its free memory (available minus reserved) can
/// hold one more copy of the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailableMemoryFilter;

impl ReplicaFilter for AvailableMemoryFilter {
    fn name(&self) -> &'static str {
        "available_memory"
    }

    fn filter(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> bool {
        workload.model().memory_bytes <= server.replica().free_memory()
    }

    fn describe(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> String {
        let replica = server.replica();
        format!(
            "model memory {} replica available {} reserved {}",
            workload.model().memory_bytes,
            replica.available_memory_bytes,
            replica.reserved_memory_bytes,
        )
    }
}
