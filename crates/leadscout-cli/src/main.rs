mod report;
mod run;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Discover and qualify nearby business leads")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover nearby places and split them into qualified and excluded leads
    Run {
        /// Log the planned search and stop before calling the Places API
        #[arg(long)]
        dry_run: bool,
        /// Report format written to stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective settings (file + environment overrides) as YAML
    Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Some(Commands::Run { dry_run, format }) => {
            run::run_discovery(&config, dry_run, format).await
        }
        Some(Commands::Settings) => run::print_settings(&config),
        None => run::run_discovery(&config, false, OutputFormat::Text).await,
    };

    if let Err(ref err) = result {
        tracing::error!(error = %format!("{err:#}"), "run failed");
    }
    result
}
