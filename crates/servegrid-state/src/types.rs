//! Domain types for the ServeGrid cluster snapshot.
//!
//! These types mirror what the model and server stores expose at their
//! boundary. Placement only reads them; the lifecycle that produces them
//! (loading, availability transitions, replica bookkeeping) lives elsewhere.

use serde::{Deserialize, Deserializer, Serialize};

/// Name of a model (shared by all of its versions).
pub type ModelName = String;

/// Name of a server (shared by all of its replicas).
pub type ServerName = String;

// ── Model ─────────────────────────────────────────────────────────

/// A model version awaiting (or holding) replica placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelVersion {
    pub name: ModelName,
    pub version: u32,
    /// Capability tags a replica must advertise to host this model.
    /// May be empty, may contain duplicates.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirements: Vec<String>,
    /// Memory needed per loaded replica in bytes.
    #[serde(default)]
    pub memory_bytes: u64,
    /// Target replica count.
    #[serde(default = "default_replicas")]
    pub replicas: u32,
    /// Server this version is pinned to, if any.
    #[serde(default)]
    pub server: Option<ServerName>,
    #[serde(default)]
    pub state: ModelState,
}

fn default_replicas() -> u32 {
    1
}

/// Read a tag list where an explicit `null` means the same as an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Aggregate state of a model version across its replicas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    #[default]
    Unknown,
    Progressing,
    Available,
    Failed,
    Terminating,
}

// ── Server replica ────────────────────────────────────────────────

/// A single replica of an inference server, as seen by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerReplica {
    pub server: ServerName,
    pub index: u32,
    /// Inference service host.
    pub address: String,
    pub http_port: u16,
    pub grpc_port: u16,
    /// Capability tags this replica advertises (e.g. model frameworks).
    /// May be empty, may contain duplicates.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub capabilities: Vec<String>,
    /// Total memory on the replica (bytes).
    #[serde(default)]
    pub memory_bytes: u64,
    /// Memory not yet used by loaded models (bytes).
    #[serde(default)]
    pub available_memory_bytes: u64,
    /// Memory promised to models that are still loading (bytes).
    #[serde(default)]
    pub reserved_memory_bytes: u64,
    #[serde(default)]
    pub draining: bool,
    /// Keys of model versions currently loaded on this replica.
    /// Store bookkeeping carried through the snapshot; placement ignores it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub loaded_models: Vec<String>,
    /// Memory over-commit allowance set by the server store. Placement
    /// does not apply it.
    #[serde(default)]
    pub over_commit_percentage: u32,
}

impl ModelVersion {
    /// Build the composite key `{name}:{version}`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

impl ServerReplica {
    /// Build the composite key `{server}:{index}`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.server, self.index)
    }

    /// Memory left for new models once in-flight reservations are counted.
    pub fn free_memory(&self) -> u64 {
        self.available_memory_bytes
            .saturating_sub(self.reserved_memory_bytes)
    }
}
