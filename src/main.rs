//! Pansearch main entry point
//!
//! This is the command-line interface for searching public cloud-drive
//! shares through a third-party aggregator.

use anyhow::Context;
use clap::Parser;
use pansearch::config::{load_config_with_hash, Config};
use pansearch::search::{build_http_client, search};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pansearch: search public cloud-drive shares by keyword
///
/// Queries the configured aggregator, extracts result cards from the
/// returned page, and prints up to 20 provider links.
#[derive(Parser, Debug)]
#[command(name = "pansearch")]
#[command(version = "1.0.1")]
#[command(about = "Search public cloud-drive shares by keyword", long_about = None)]
struct Cli {
    /// Search keyword, e.g. "流浪地球 4K"
    #[arg(value_name = "KEYWORD")]
    keyword: String,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let client = build_http_client(&config.search).context("failed to build HTTP client")?;

    let output = search(&client, &config, &cli.keyword).await;
    println!("{}", output);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pansearch=info,warn"),
            1 => EnvFilter::new("pansearch=debug,info"),
            2 => EnvFilter::new("pansearch=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
