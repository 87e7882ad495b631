//! Application State
//!
//! Shared state accessible by all API handlers. The population table is
//! loaded once before the server binds and never mutated, so handlers read
//! it without any locking.

use crate::config::ServerConfig;
use crate::data::PopulationTable;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable population table
    pub table: Arc<PopulationTable>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a loaded table
    pub fn new(table: Arc<PopulationTable>, config: ServerConfig) -> Self {
        Self {
            table,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
