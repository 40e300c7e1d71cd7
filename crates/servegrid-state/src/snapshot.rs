//! ClusterSnapshot — an immutable view of models and server replicas.
//!
//! Snapshots are loaded from TOML (`[[models]]` / `[[replicas]]` arrays)
//! or JSON (`{"models": [...], "replicas": [...]}`). Unknown top-level
//! tables are ignored so the same document can carry other sections,
//! such as placement settings.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::types::*;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Fully materialized cluster state handed to the placement filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub models: Vec<ModelVersion>,
    #[serde(default)]
    pub replicas: Vec<ServerReplica>,
}

impl ClusterSnapshot {
    /// Build a snapshot from already-loaded records, rejecting duplicate keys.
    pub fn new(models: Vec<ModelVersion>, replicas: Vec<ServerReplica>) -> StateResult<Self> {
        let snapshot = Self { models, replicas };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot file. `.json` files are parsed as JSON, everything
    /// else as TOML.
    pub fn from_file(path: &Path) -> StateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(map_err!(Read))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let snapshot = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(
            ?path,
            models = snapshot.models.len(),
            replicas = snapshot.replicas.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn from_toml_str(content: &str) -> StateResult<Self> {
        let snapshot: Self = toml::from_str(content).map_err(map_err!(Parse))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_json_str(content: &str) -> StateResult<Self> {
        let snapshot: Self = serde_json::from_str(content).map_err(map_err!(Parse))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Look up a model by name. When several versions share the name the
    /// highest version is returned.
    pub fn model(&self, name: &str) -> StateResult<&ModelVersion> {
        self.models
            .iter()
            .filter(|m| m.name == name)
            .max_by_key(|m| m.version)
            .ok_or_else(|| StateError::NotFound(format!("model {name}")))
    }

    /// Look up a replica by its `{server}:{index}` key.
    pub fn replica(&self, key: &str) -> StateResult<&ServerReplica> {
        self.replicas
            .iter()
            .find(|r| r.key() == key)
            .ok_or_else(|| StateError::NotFound(format!("replica {key}")))
    }

    fn validate(&self) -> StateResult<()> {
        let mut seen = HashSet::new();
        for model in &self.models {
            let key = model.key();
            if !seen.insert(key.clone()) {
                return Err(StateError::Duplicate { kind: "model", key });
            }
        }

        seen.clear();
        for replica in &self.replicas {
            let key = replica.key();
            if !seen.insert(key.clone()) {
                return Err(StateError::Duplicate { kind: "replica", key });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[models]]
name = "iris"
version = 1
requirements = ["sklearn"]
memory_bytes = 100

[[models]]
name = "iris"
version = 2
requirements = ["sklearn", "xgboost"]
memory_bytes = 200

[[replicas]]
server = "mlserver"
index = 0
address = "10.0.0.1"
http_port = 8080
grpc_port = 5001
capabilities = ["sklearn", "xgboost"]
memory_bytes = 1000
available_memory_bytes = 800

[[replicas]]
server = "triton"
index = 0
address = "10.0.0.2"
http_port = 8080
grpc_port = 5001

[placement]
mode = "accumulate"
"#;

    #[test]
    fn parses_toml_and_ignores_other_tables() {
        let snapshot = ClusterSnapshot::from_toml_str(SAMPLE).unwrap();
        assert_eq!(snapshot.models.len(), 2);
        assert_eq!(snapshot.replicas.len(), 2);
        assert!(snapshot.replicas[1].capabilities.is_empty());
    }

    #[test]
    fn model_lookup_returns_latest_version() {
        let snapshot = ClusterSnapshot::from_toml_str(SAMPLE).unwrap();
        let model = snapshot.model("iris").unwrap();
        assert_eq!(model.version, 2);
    }

    #[test]
    fn unknown_model_is_not_found() {
        let snapshot = ClusterSnapshot::from_toml_str(SAMPLE).unwrap();
        assert!(matches!(
            snapshot.model("resnet"),
            Err(StateError::NotFound(_))
        ));
    }

    #[test]
    fn replica_lookup_by_key() {
        let snapshot = ClusterSnapshot::from_toml_str(SAMPLE).unwrap();
        assert_eq!(snapshot.replica("triton:0").unwrap().address, "10.0.0.2");
        assert!(snapshot.replica("triton:1").is_err());
    }

    #[test]
    fn rejects_duplicate_replica_keys() {
        let doc = r#"
[[replicas]]
server = "s"
index = 0
address = "a"
http_port = 1
grpc_port = 2

[[replicas]]
server = "s"
index = 0
address = "b"
http_port = 1
grpc_port = 2
"#;
        let err = ClusterSnapshot::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, StateError::Duplicate { kind: "replica", .. }));
    }

    #[test]
    fn rejects_duplicate_model_keys() {
        let doc = r#"
[[models]]
name = "m"
version = 1

[[models]]
name = "m"
version = 1
"#;
        assert!(ClusterSnapshot::from_toml_str(doc).is_err());
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = ClusterSnapshot::from_toml_str("models = 3").unwrap_err();
        assert!(matches!(err, StateError::Parse(_)));
    }

    #[test]
    fn loads_json_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        std::fs::write(
            &path,
            r#"{"models":[{"name":"m","version":1,"requirements":["onnx"]}],"replicas":[]}"#,
        )
        .unwrap();

        let snapshot = ClusterSnapshot::from_file(&path).unwrap();
        assert_eq!(snapshot.models[0].requirements, vec!["onnx".to_string()]);
    }

    #[test]
    fn null_tag_lists_load_as_empty_sets() {
        let snapshot = ClusterSnapshot::from_json_str(
            r#"{"models":[{"name":"m","version":1,"requirements":null}],
                "replicas":[{"server":"s","index":0,"address":"a","http_port":1,
                             "grpc_port":2,"capabilities":null}]}"#,
        )
        .unwrap();

        assert!(snapshot.models[0].requirements.is_empty());
        assert!(snapshot.replicas[0].capabilities.is_empty());
    }

    #[test]
    fn loads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let snapshot = ClusterSnapshot::from_file(&path).unwrap();
        assert_eq!(snapshot.replicas[0].key(), "mlserver:0");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = ClusterSnapshot::from_file(Path::new("/nonexistent/cluster.toml")).unwrap_err();
        assert!(matches!(err, StateError::Read(_)));
    }
}
