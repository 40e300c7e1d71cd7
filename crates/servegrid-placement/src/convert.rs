//! Conversions from `servegrid-state` records to filter inputs.
//!
//! Bridges a [`ClusterSnapshot`] to the [`Workload`]s and
//! [`CandidateServer`]s the filters consume. Candidates are built once per
//! snapshot so their capability indexes are shared across every workload.

use servegrid_state::ClusterSnapshot;

use crate::filter::{CandidateServer, Workload};

/// One candidate per replica in the snapshot, in snapshot order.
pub fn candidate_servers(snapshot: &ClusterSnapshot) -> Vec<CandidateServer<'_>> {
    snapshot.replicas.iter().map(CandidateServer::new).collect()
}

/// One workload per model version in the snapshot, in snapshot order.
pub fn workloads(snapshot: &ClusterSnapshot) -> Vec<Workload<'_>> {
    snapshot.models.iter().map(Workload::new).collect()
}
