//! Dashboard page
//!
//! Serves the single-page UI as an embedded static asset. The page is pure
//! declarative structure (dropdowns, cards, two chart panels); all view
//! computation happens server-side in [`crate::charts`], and Plotly.js only
//! draws the figures it is handed.

use axum::response::Html;

/// The dashboard page, embedded at compile time
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// GET /
///
/// Serve the dashboard page.
pub async fn dashboard() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wires_both_charts() {
        assert!(INDEX_HTML.contains("id=\"map-chart\""));
        assert!(INDEX_HTML.contains("id=\"trend-chart\""));
        assert!(INDEX_HTML.contains("/api/v1/options"));
        assert!(INDEX_HTML.contains("/api/v1/trend"));
    }
}
