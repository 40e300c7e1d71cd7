//! Capability tag sets.
//!
//! Tags are opaque strings compared by exact equality: no case folding,
//! no whitespace trimming. `"SKLearn"` and `"sklearn"` are different tags.
//!
//! Both sets deduplicate on construction, so neither the order nor the
//! repetition of tags in the source sequences can affect matching.

use std::collections::HashSet;

use servegrid_state::{ModelVersion, ServerReplica};

/// Tags a server replica advertises, indexed for membership tests.
///
/// Built once per replica and reused for every workload evaluated
/// against it. Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    tags: HashSet<String>,
}

impl CapabilitySet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl From<&ServerReplica> for CapabilitySet {
    fn from(replica: &ServerReplica) -> Self {
        Self::new(replica.capabilities.iter().cloned())
    }
}

/// Tags a workload requires, deduplicated.
///
/// First-occurrence order is kept so diagnostics list tags the way the
/// model declared them; matching never depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    tags: Vec<String>,
}

impl RequirementSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag: &String| seen.insert(tag.clone()))
            .collect();
        Self { tags }
    }

    /// Number of distinct required tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// True iff every required tag is among `capabilities`.
    ///
    /// An empty requirement set is satisfied by anything. Stops at the
    /// first missing tag.
    pub fn is_satisfied_by(&self, capabilities: &CapabilitySet) -> bool {
        self.tags.iter().all(|tag| capabilities.contains(tag))
    }

    /// Required tags absent from `capabilities`, in declaration order.
    pub fn missing_from(&self, capabilities: &CapabilitySet) -> Vec<&str> {
        self.iter().filter(|tag| !capabilities.contains(tag)).collect()
    }
}

impl From<&ModelVersion> for RequirementSet {
    fn from(model: &ModelVersion) -> Self {
        Self::new(model.requirements.iter().cloned())
    }
}
