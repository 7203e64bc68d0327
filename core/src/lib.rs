// ReviewLens Core Library
// Synthetic review pipeline and sentiment dashboard runtime

pub mod dashboard;
pub mod filter;
pub mod generator;
pub mod metrics;
pub mod model;
pub mod sentiment;
pub mod store;

// Export core types
pub use filter::{ReviewFilter, ALL};
pub use generator::ReviewGenerator;
pub use metrics::{compute_view, DashboardData, DashboardView};
pub use model::{Review, Sentiment, TaggedReview};
pub use sentiment::SentimentAnalyzer;
pub use store::ReviewStore;

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewLensError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReviewLensError>;
