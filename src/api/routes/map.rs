//! Map Route
//!
//! Endpoint for the choropleth map figure.
//!
//! - GET /api/v1/map/:year - Map figure for one year

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{render_map, Figure};

/// GET /api/v1/map/:year
///
/// Return the choropleth figure for the given year. A year with no records
/// yields an empty figure, not an error.
pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Figure>> {
    let figure = render_map(&state.table, year);

    tracing::debug!(year, traces = figure.data.len(), "Rendered map figure");

    Ok(Json(figure))
}
