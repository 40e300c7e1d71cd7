use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "servegrid",
    about = "ServeGrid — model replica placement filters",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the replicas eligible to host each model.
    ///
    /// The snapshot may carry a [placement] table selecting filters and
    /// evaluation mode; without one, all filters run in short-circuit mode.
    Filter {
        /// Cluster snapshot (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Only evaluate this model (latest version)
        #[arg(short, long)]
        model: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show every filter rejection for one model across all replicas
    Explain {
        #[arg(short, long)]
        snapshot: PathBuf,
        #[arg(short, long)]
        model: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("servegrid=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Filter { snapshot, model, format } => {
            commands::filter::run(&snapshot, model.as_deref(), format)?
        }
        Commands::Explain { snapshot, model, format } => {
            commands::explain::run(&snapshot, &model, format)?
        }
    };
    println!("{output}");
    Ok(())
}
