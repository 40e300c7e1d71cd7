//! Capability requirements rule.

use crate::filter::{CandidateServer, ReplicaFilter, Workload};

/// Admits a replica iff it advertises every tag the model requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementsFilter;

impl ReplicaFilter for RequirementsFilter {
    fn name(&self) -> &'static str {
        "requirements"
    }

    fn filter(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> bool {
        workload.requirements().is_satisfied_by(server.capabilities())
    }

    fn describe(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> String {
        let required: Vec<&str> = workload.requirements().iter().collect();
        let mut advertised: Vec<&str> = server.capabilities().iter().collect();
        advertised.sort_unstable();
        let missing = workload.requirements().missing_from(server.capabilities());
        format!(
            "model requirements {required:?} replica capabilities {advertised:?} \
             missing {missing:?}"
        )
    }
}
