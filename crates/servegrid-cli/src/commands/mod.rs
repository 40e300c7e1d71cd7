pub mod explain;
pub mod filter;

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use servegrid_placement::PlacementConfig;
use servegrid_state::ClusterSnapshot;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the snapshot and its `[placement]` settings from one file.
///
/// `.json` files are parsed as JSON, everything else as TOML.
pub fn load(path: &Path) -> anyhow::Result<(ClusterSnapshot, PlacementConfig)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let (snapshot, config) = if is_json {
        (
            ClusterSnapshot::from_json_str(&content),
            PlacementConfig::from_json_str(&content),
        )
    } else {
        (
            ClusterSnapshot::from_toml_str(&content),
            PlacementConfig::from_toml_str(&content),
        )
    };
    let snapshot = snapshot.with_context(|| format!("loading snapshot {}", path.display()))?;
    let config =
        config.with_context(|| format!("loading placement config {}", path.display()))?;
    tracing::info!(
        models = snapshot.models.len(),
        replicas = snapshot.replicas.len(),
        filters = ?config.filters,
        mode = ?config.mode,
        "snapshot ready"
    );
    Ok((snapshot, config))
}


#[cfg(test)]
mod tests {
    use super::*;
    use servegrid_placement::{EvaluationMode, FilterKind};

    #[test]
    fn loads_snapshot_and_placement_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = testing::write_cluster(&dir);

        let (snapshot, config) = load(&path).unwrap();
        assert_eq!(snapshot.models.len(), 2);
        assert_eq!(snapshot.replicas.len(), 2);
        assert_eq!(config.filters.len(), 3);
    }

    #[test]
    fn loads_snapshot_and_placement_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        std::fs::write(
            &path,
            r#"{"placement":{"filters":["requirements"],"mode":"accumulate"},
                "models":[{"name":"m","version":1,"requirements":null}],
                "replicas":[{"server":"s","index":0,"address":"a","http_port":1,
                             "grpc_port":2,"capabilities":null}]}"#,
        )
        .unwrap();

        let (snapshot, config) = load(&path).unwrap();
        assert!(snapshot.models[0].requirements.is_empty());
        assert_eq!(config.filters, vec![FilterKind::Requirements]);
        assert_eq!(config.mode, EvaluationMode::Accumulate);
    }

    #[test]
    fn missing_file_fails() {
        assert!(load(Path::new("/nonexistent/cluster.toml")).is_err());
    }
}
