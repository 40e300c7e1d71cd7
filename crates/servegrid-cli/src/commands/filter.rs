use std::path::Path;

use serde::Serialize;

use super::OutputFormat;
use servegrid_placement::{Workload, candidate_servers};

#[derive(Debug, Serialize)]
struct ModelPlacement {
    model: String,
    requirements: Vec<String>,
    eligible: Vec<String>,
}

pub fn run(path: &Path, model: Option<&str>, format: OutputFormat) -> anyhow::Result<String> {
    let (snapshot, config) = super::load(path)?;
    let pipeline = config.build();
    let candidates = candidate_servers(&snapshot);

    let models = match model {
        Some(name) => vec![snapshot.model(name)?],
        None => snapshot.models.iter().collect(),
    };

    let placements: Vec<ModelPlacement> = models
        .into_iter()
        .map(|m| {
            let workload = Workload::new(m);
            let eligible = pipeline
                .eligible(&workload, &candidates)
                .into_iter()
                .map(|c| c.key().to_string())
                .collect();
            ModelPlacement {
                model: m.key(),
                requirements: workload.requirements().iter().map(str::to_string).collect(),
                eligible,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&placements)?),
        OutputFormat::Text => Ok(format_text(&placements)),
    }
}

fn format_text(placements: &[ModelPlacement]) -> String {
    let mut out = String::new();
    for p in placements {
        let eligible = if p.eligible.is_empty() {
            "(none)".to_string()
        } else {
            p.eligible.join(", ")
        };
        out.push_str(&format!(
            "{} [{}]: {}\n",
            p.model,
            p.requirements.join(", "),
            eligible
        ));
    }
    out.trim_end().to_string()
}
