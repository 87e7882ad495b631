//! # Statepop
//!
//! US State Population Dashboard - an HTTP-served dashboard over a static
//! table of historical US state population figures.
//!
//! The whole system is deliberately small: a CSV is fetched once at startup
//! into an immutable in-memory [`data::PopulationTable`], and two pure view
//! functions turn slices of that table into Plotly-figure-shaped JSON:
//!
//! - [`charts::render_map`]: a choropleth of state populations for one year
//! - [`charts::render_trend`]: a line chart of one state's population history
//!
//! The API layer exposes both views plus the dropdown option lists, and
//! serves the single-page UI that renders the figures client-side.
//!
//! ## Modules
//!
//! - [`data`]: population table types and the one-shot CSV loader
//! - [`charts`]: figure descriptors and the two view functions
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use statepop::api::{serve, AppState};
//! use statepop::config::Config;
//! use statepop::data::Loader;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     // Load the population table once; failure is fatal to startup.
//!     let table = Arc::new(Loader::from_config(&config.data).load().await?);
//!
//!     let state = AppState::new(table, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod data;
pub mod ui;

// Re-export top-level types for convenience
pub use data::{DataError, DataResult, Loader, PopulationRecord, PopulationTable};

pub use charts::{render_map, render_trend, resolve_selection, Figure, Layout, Trace, Trigger};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
