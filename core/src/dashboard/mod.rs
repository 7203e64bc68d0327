// Dashboard module - filterable review sentiment dashboard
//
// Serves the embedded UI and a JSON API that recomputes the view model
// for every filter change.

mod api;
mod static_assets;

pub use api::DashboardServer;

/// Dashboard configuration
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub port: u16,
    pub host: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: 8050,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("REVIEWLENS_DASHBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8050),
            host: std::env::var("REVIEWLENS_DASHBOARD_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }
}
