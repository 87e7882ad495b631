//! Trend Route
//!
//! Endpoint for the per-state population trend figure.
//!
//! - POST /api/v1/trend - Trend figure for the resolved state

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::TrendRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{render_trend, resolve_selection, Figure};

/// POST /api/v1/trend
///
/// Resolve which input source drives the view (most recent event wins),
/// then return the line figure for that state. A state code outside the
/// table yields an empty figure; a request whose winning input carries no
/// value is a validation error.
pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrendRequest>,
) -> ApiResult<Json<Figure>> {
    let selected = resolve_selection(
        req.trigger,
        req.click_state.as_deref(),
        req.dropdown_state.as_deref(),
    )
    .ok_or_else(|| {
        ApiError::Validation(format!(
            "trigger {:?} fired but carried no state selection",
            req.trigger
        ))
    })?;

    let selected = selected.to_uppercase();
    let figure = render_trend(&state.table, &selected);

    tracing::debug!(state = %selected, trigger = ?req.trigger, "Rendered trend figure");

    Ok(Json(figure))
}
