//! Statepop Dashboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Flags override environment variables, which override the config file:
//! - `--host`: Host to bind to (default: 0.0.0.0)
//! - `--port`: Port to listen on (default: 8050)
//! - `--debug`: Verbose request logging
//! - `--config`: Path to a TOML config file
//! - `RUST_LOG`: Log filter (default: statepop=info)

use clap::Parser;
use statepop::api::{serve, AppState};
use statepop::config::Config;
use statepop::data::Loader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// US State Population Dashboard server
#[derive(Debug, Parser)]
#[command(name = "statepop", version, about)]
struct Cli {
    /// Host to bind the dashboard server to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Enable verbose request logging
    #[arg(long)]
    debug: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; --debug lowers the default filter
    let default_filter = if cli.debug {
        "statepop=debug,tower_http=debug"
    } else {
        "statepop=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Statepop dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.debug |= cli.debug;

    // One attempt, no retries: the table is the whole application state,
    // so a failed load aborts startup.
    let table = match Loader::from_config(&config.data).load().await {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!("Failed to load population table: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(table, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Statepop dashboard stopped");
    Ok(())
}
