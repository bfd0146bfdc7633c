mod output;
mod update_parks;
mod visits;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parkmap")]
#[command(about = "Maintenance tasks for the national parks map data files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every park from the NPS API and write the map's sites JSON.
    UpdateParks {
        /// Path of parks.json to (over)write.
        file: PathBuf,
    },
    /// Sort the visits log by park code and rewrite it in place.
    SortVisits {
        /// Path of visits.json.
        #[arg(default_value = "src/data/visits.json")]
        file: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::UpdateParks { file } => {
            let config = parkmap_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            update_parks::run_update_parks(&config, &file).await
        }
        Commands::SortVisits { file } => {
            let log_level =
                std::env::var("PARKMAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            init_tracing(&log_level)?;
            visits::run_sort_visits(&file)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `fallback` is used as the filter.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
