// Stage 3: load the tagged csv once and serve the dashboard.

use std::sync::Arc;

use reviewlens_core::dashboard::{DashboardConfig, DashboardServer};
use reviewlens_core::ReviewStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().compact().init();

    let input = std::env::var("REVIEWLENS_TAGGED")
        .unwrap_or_else(|_| "reviews_with_sentiment.csv".into());

    let store = Arc::new(ReviewStore::load(&input)?);
    tracing::info!(count = store.len(), input = %input, "Loaded tagged reviews");

    let config = DashboardConfig::from_env();
    let server = DashboardServer::new(config, store);
    server.serve().await?;

    Ok(())
}
