//! Options Route
//!
//! Endpoint for the dropdown option lists.
//!
//! - GET /api/v1/options - Distinct years and states plus default selections

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::OptionsResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/options
///
/// Return the dropdown options derived from the loaded table. Defaults are
/// the latest year and California when present (first state otherwise).
pub async fn get_options(State(state): State<Arc<AppState>>) -> ApiResult<Json<OptionsResponse>> {
    let years = state.table.distinct_years();
    let states = state.table.distinct_states();

    // The loader rejects empty tables, so these lists are never empty.
    let default_year = *years
        .last()
        .ok_or_else(|| ApiError::Internal("table has no years".to_string()))?;

    let default_state = if states.iter().any(|s| s == "CA") {
        "CA".to_string()
    } else {
        states
            .first()
            .cloned()
            .ok_or_else(|| ApiError::Internal("table has no states".to_string()))?
    };

    Ok(Json(OptionsResponse {
        years,
        states,
        default_year,
        default_state,
    }))
}
