//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::Trigger;

// ============================================
// OPTIONS DTOs
// ============================================

/// Dropdown option lists derived from the loaded table
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// Distinct years present in the table, ascending
    pub years: Vec<i32>,
    /// Distinct state codes present in the table, sorted
    pub states: Vec<String>,
    /// Initially selected year (latest in the table)
    pub default_year: i32,
    /// Initially selected state
    pub default_state: String,
}

// ============================================
// TREND DTOs
// ============================================

/// Trend view request
///
/// Carries both possible input values plus the provenance tag saying which
/// event actually fired; the server resolves precedence from the tag.
#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    /// Which input event triggered this request
    pub trigger: Trigger,
    /// State code from the most recent map click, if any
    #[serde(default)]
    pub click_state: Option<String>,
    /// Current dropdown value, if any
    #[serde(default)]
    pub dropdown_state: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of records in the loaded table
    pub rows: usize,
    /// Number of distinct states
    pub states: usize,
    /// Earliest year in the table
    pub earliest_year: Option<i32>,
    /// Latest year in the table
    pub latest_year: Option<i32>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
