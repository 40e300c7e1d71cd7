//! `[placement]` configuration.
//!
//! ```toml
//! [placement]
//! filters = ["draining", "requirements", "available_memory"]
//! mode = "short_circuit"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, PlacementResult};
use crate::filter::ReplicaFilter;
use crate::filters::{AvailableMemoryFilter, DrainingFilter, RequirementsFilter};
use crate::pipeline::{EvaluationMode, FilterPipeline};

/// A filter that can be enabled from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Requirements,
    AvailableMemory,
    Draining,
}

impl FilterKind {
    fn instantiate(self) -> Box<dyn ReplicaFilter> {
        match self {
            FilterKind::Requirements => Box::new(RequirementsFilter),
            FilterKind::AvailableMemory => Box::new(AvailableMemoryFilter),
            FilterKind::Draining => Box::new(DrainingFilter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementConfig {
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterKind>,
    #[serde(default)]
    pub mode: EvaluationMode,
}

fn default_filters() -> Vec<FilterKind> {
    vec![
        FilterKind::Draining,
        FilterKind::Requirements,
        FilterKind::AvailableMemory,
    ]
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            filters: default_filters(),
            mode: EvaluationMode::default(),
        }
    }
}

/// Document wrapper so `[placement]` can live alongside other tables.
#[derive(Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    placement: Option<PlacementConfig>,
}

impl PlacementConfig {
    /// Read the `[placement]` table from a TOML document. A document
    /// without one yields the defaults.
    pub fn from_toml_str(content: &str) -> PlacementResult<Self> {
        let doc: ConfigDocument =
            toml::from_str(content).map_err(|e| PlacementError::Config(e.to_string()))?;
        Ok(doc.placement.unwrap_or_default())
    }

    /// Read the `placement` object from a JSON document.
    pub fn from_json_str(content: &str) -> PlacementResult<Self> {
        let doc: ConfigDocument =
            serde_json::from_str(content).map_err(|e| PlacementError::Config(e.to_string()))?;
        Ok(doc.placement.unwrap_or_default())
    }

    /// Build the pipeline this config describes.
    pub fn build(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new(self.mode);
        for kind in &self.filters {
            pipeline.push(kind.instantiate());
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_table_absent() {
        let config =
            PlacementConfig::from_toml_str("[[models]]\nname = \"m\"\nversion = 1\n").unwrap();
        assert_eq!(config, PlacementConfig::default());
        assert_eq!(
            config.build().filter_names(),
            vec!["draining", "requirements", "available_memory"]
        );
    }

    #[test]
    fn parses_filters_and_mode() {
        let config = PlacementConfig::from_toml_str(
            r#"
[placement]
filters = ["requirements"]
mode = "accumulate"
"#,
        )
        .unwrap();

        assert_eq!(config.filters, vec![FilterKind::Requirements]);
        let pipeline = config.build();
        assert_eq!(pipeline.mode(), EvaluationMode::Accumulate);
        assert_eq!(pipeline.filter_names(), vec!["requirements"]);
    }

    #[test]
    fn empty_filter_list_is_allowed() {
        let config = PlacementConfig::from_toml_str("[placement]\nfilters = []\n").unwrap();
        assert!(config.build().is_empty());
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err =
            PlacementConfig::from_toml_str("[placement]\nfilters = [\"gpu\"]\n").unwrap_err();
        assert!(matches!(err, PlacementError::Config(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(PlacementConfig::from_toml_str("[placement]\nshort = true\n").is_err());
    }

    #[test]
    fn parses_json_placement() {
        let config =
            PlacementConfig::from_json_str(r#"{"placement":{"filters":["draining"]},"models":[]}"#)
                .unwrap();
        assert_eq!(config.filters, vec![FilterKind::Draining]);
        assert_eq!(config.mode, EvaluationMode::ShortCircuit);
    }
}
