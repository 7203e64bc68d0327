// Stage 1: generate synthetic review rows and write the raw csv.

use reviewlens_core::{store, ReviewGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().compact().init();

    let count: usize = std::env::var("REVIEWLENS_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000);
    let output =
        std::env::var("REVIEWLENS_RAW").unwrap_or_else(|_| "synthetic_reviews.csv".into());

    let mut generator = match std::env::var("REVIEWLENS_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        Some(seed) => ReviewGenerator::with_seed(seed),
        None => ReviewGenerator::new(),
    };

    let reviews = generator.generate(count);
    store::save_reviews(&reviews, &output)?;

    tracing::info!(count, output = %output, "Wrote synthetic reviews");
    Ok(())
}
