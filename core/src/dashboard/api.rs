// Dashboard HTTP API server
//
// Serves the embedded UI and the JSON endpoints the UI polls on every
// filter change. Each request recomputes the view model synchronously
// over the shared read-only store.

use crate::dashboard::static_assets;
use crate::dashboard::DashboardConfig;
use crate::filter::ReviewFilter;
use crate::metrics::compute_view;
use crate::store::ReviewStore;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Dashboard server state
#[derive(Clone)]
struct DashboardState {
    store: Arc<ReviewStore>,
}

/// Dashboard HTTP server
pub struct DashboardServer {
    config: DashboardConfig,
    store: Arc<ReviewStore>,
}

impl DashboardServer {
    pub fn new(config: DashboardConfig, store: Arc<ReviewStore>) -> Self {
        Self { config, store }
    }

    /// Start the dashboard server
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!(
            target: "dashboard",
            addr = %addr,
            reviews = self.store.len(),
            "Starting dashboard server"
        );

        let state = DashboardState { store: self.store };

        let app = Router::new()
            .route("/", get(index_handler))
            .route("/static/*asset", get(static_asset_handler))
            .route("/api/options", get(options_handler))
            .route("/api/dashboard", get(dashboard_handler))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            target: "dashboard",
            url = %format!("http://{}", addr),
            "Dashboard server ready"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Serve the main HTML page
async fn index_handler() -> Html<&'static str> {
    Html(static_assets::INDEX)
}

async fn static_asset_handler(Path(asset): Path<String>) -> impl IntoResponse {
    match static_assets::get(asset.as_str()) {
        Some(asset) => {
            let mut headers = HeaderMap::new();
            if let Ok(value) = header::HeaderValue::from_str(asset.content_type) {
                headers.insert(header::CONTENT_TYPE, value);
            }
            (StatusCode::OK, headers, asset.body).into_response()
        }
        None => {
            let headers = HeaderMap::new();
            (StatusCode::NOT_FOUND, headers, b"Not found".as_slice()).into_response()
        }
    }
}

/// Filter option payload for the UI controls
#[derive(Serialize)]
struct FilterOptions {
    categories: Vec<String>,
    sentiments: Vec<String>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    total: usize,
}

/// Dropdown options and date-picker bounds derived from the loaded data
async fn options_handler(
    State(state): State<DashboardState>,
) -> Result<impl IntoResponse, StatusCode> {
    let mut categories = vec![crate::filter::ALL.to_string()];
    categories.extend(state.store.categories());
    let mut sentiments = vec![crate::filter::ALL.to_string()];
    sentiments.extend(state.store.sentiments());

    let (min_date, max_date) = match state.store.date_range() {
        Some((min, max)) => (Some(min), Some(max)),
        None => (None, None),
    };

    let options = FilterOptions {
        categories,
        sentiments,
        min_date,
        max_date,
        total: state.store.len(),
    };

    match serde_json::to_string(&options) {
        Ok(json) => Ok((StatusCode::OK, json)),
        Err(e) => {
            warn!(target: "dashboard", error = %e, "Failed to serialize options");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Query parameters of the dashboard endpoint
///
/// Multi-selects arrive comma separated; dates as YYYY-MM-DD. Malformed
/// dates are ignored, which disables the date filter for that side.
#[derive(Deserialize)]
struct DashboardQuery {
    categories: Option<String>,
    sentiments: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl DashboardQuery {
    fn into_filter(self) -> ReviewFilter {
        ReviewFilter {
            categories: split_selection(self.categories.as_deref()),
            sentiments: split_selection(self.sentiments.as_deref()),
            start_date: parse_date(self.start_date.as_deref()),
            end_date: parse_date(self.end_date.as_deref()),
        }
    }
}

fn split_selection(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Recompute the view model for the requested filters
async fn dashboard_handler(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let filter = query.into_filter();
    let view = compute_view(&state.store, &filter);

    match serde_json::to_string(&view) {
        Ok(json) => Ok((StatusCode::OK, json)),
        Err(e) => {
            warn!(target: "dashboard", error = %e, "Failed to serialize view");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_selection_handles_missing_and_blank_values() {
        assert!(split_selection(None).is_empty());
        assert!(split_selection(Some("")).is_empty());
        assert_eq!(
            split_selection(Some("Toys, Furniture")),
            vec!["Toys".to_string(), "Furniture".to_string()]
        );
    }

    #[test]
    fn parse_date_is_permissive() {
        assert_eq!(
            parse_date(Some("2024-01-02")),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
        assert_eq!(parse_date(Some("02/01/2024")), None);
        assert_eq!(parse_date(None), None);
    }
}
