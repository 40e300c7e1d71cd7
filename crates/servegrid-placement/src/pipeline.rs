//! Filter pipeline — runs placement rules in order over candidate replicas.
//!
//! A replica is retained only if every filter admits it. The pipeline owns
//! ordering and the short-circuit policy; individual filters stay
//! single-pair predicates. The pipeline holds no mutable state and is
//! `Send + Sync`, so one instance can serve many threads evaluating
//! different pairs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{CandidateServer, ReplicaFilter, Workload};

/// How the pipeline treats a rejecting filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Stop at the first filter that rejects.
    #[default]
    ShortCircuit,
    /// Run every filter and report every rejection.
    Accumulate,
}

/// One filter's rejection of a replica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub filter: &'static str,
    pub reason: String,
}

/// Result of running the whole pipeline over one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub server_key: String,
    pub admitted: bool,
    pub rejections: Vec<Rejection>,
}

/// An ordered set of placement filters.
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn ReplicaFilter>>,
    mode: EvaluationMode,
}

impl FilterPipeline {
    pub fn new(mode: EvaluationMode) -> Self {
        Self {
            filters: Vec::new(),
            mode,
        }
    }

    /// Append a filter; filters run in the order they were added.
    pub fn with_filter(mut self, filter: impl ReplicaFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn push(&mut self, filter: Box<dyn ReplicaFilter>) {
        self.filters.push(filter);
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Names of the registered filters, in evaluation order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True iff every filter admits the pair. Always stops at the first
    /// rejection regardless of mode.
    pub fn admits(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> bool {
        self.filters.iter().all(|f| f.filter(workload, server))
    }

    /// Run the pipeline over one pair, collecting rejections per the mode.
    pub fn evaluate(&self, workload: &Workload<'_>, server: &CandidateServer<'_>) -> FilterOutcome {
        let mut rejections = Vec::new();

        for filter in &self.filters {
            if filter.filter(workload, server) {
                continue;
            }

            let reason = filter.describe(workload, server);
            debug!(
                filter = filter.name(),
                model = %workload.model().key(),
                replica = server.key(),
                %reason,
                "replica rejected"
            );
            rejections.push(Rejection {
                filter: filter.name(),
                reason,
            });

            if self.mode == EvaluationMode::ShortCircuit {
                break;
            }
        }

        FilterOutcome {
            server_key: server.key().to_string(),
            admitted: rejections.is_empty(),
            rejections,
        }
    }

    /// Candidates every filter admits, in input order.
    pub fn eligible<'s, 'a>(
        &self,
        workload: &Workload<'_>,
        servers: &'s [CandidateServer<'a>],
    ) -> Vec<&'s CandidateServer<'a>> {
        let eligible: Vec<_> = servers
            .iter()
            .filter(|server| self.admits(workload, server))
            .collect();
        debug!(
            model = %workload.model().key(),
            candidates = servers.len(),
            eligible = eligible.len(),
            "filtered candidate replicas"
        );
        eligible
    }

    /// Full per-replica outcome for every candidate, in input order.
    pub fn explain(
        &self,
        workload: &Workload<'_>,
        servers: &[CandidateServer<'_>],
    ) -> Vec<FilterOutcome> {
        servers
            .iter()
            .map(|server| self.evaluate(workload, server))
            .collect()
    }
}

impl std::fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("filters", &self.filter_names())
            .field("mode", &self.mode)
            .finish()
    }
}
