use std::path::Path;

use serde::Serialize;

use super::OutputFormat;
use servegrid_placement::{EvaluationMode, FilterOutcome, Workload, candidate_servers};

#[derive(Debug, Serialize)]
struct Explanation {
    model: String,
    outcomes: Vec<FilterOutcome>,
}

/// Evaluate every replica for one model, reporting all rejections.
pub fn run(path: &Path, model: &str, format: OutputFormat) -> anyhow::Result<String> {
    let (snapshot, mut config) = super::load(path)?;
    config.mode = EvaluationMode::Accumulate;
    let pipeline = config.build();

    let model = snapshot.model(model)?;
    let workload = Workload::new(model);
    let candidates = candidate_servers(&snapshot);

    let explanation = Explanation {
        model: model.key(),
        outcomes: pipeline.explain(&workload, &candidates),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&explanation)?),
        OutputFormat::Text => Ok(format_text(&explanation)),
    }
}

fn format_text(explanation: &Explanation) -> String {
    let mut out = format!("{}\n", explanation.model);
    for outcome in &explanation.outcomes {
        if outcome.admitted {
            out.push_str(&format!("  ✓ {}\n", outcome.server_key));
            continue;
        }
        out.push_str(&format!("  ✗ {}\n", outcome.server_key));
        for rejection in &outcome.rejections {
            out.push_str(&format!("      {}: {}\n", rejection.filter, rejection.reason));
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::write_cluster;

    #[test]
    fn reports_all_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cluster(&dir);

        let output = run(&path, "resnet", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let outcomes = value["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0]["admitted"], false);
        // Draining replica fails both the draining and requirements rules.
        let filters: Vec<_> = outcomes[1]["rejections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["filter"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(filters, vec!["draining", "requirements"]);
    }

    #[test]
    fn text_marks_admitted_replicas() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cluster(&dir);

        let output = run(&path, "iris", OutputFormat::Text).unwrap();
        assert!(output.starts_with("iris:1"));
        assert!(output.contains("✓ mlserver:0"));
        assert!(output.contains("✗ mlserver:1"));
        assert!(output.contains("draining: replica draining true"));
    }
}
