// Stage 2: score every review text once and write the tagged csv.

use reviewlens_core::{store, Sentiment, SentimentAnalyzer, TaggedReview};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().compact().init();

    let input =
        std::env::var("REVIEWLENS_RAW").unwrap_or_else(|_| "synthetic_reviews.csv".into());
    let output = std::env::var("REVIEWLENS_TAGGED")
        .unwrap_or_else(|_| "reviews_with_sentiment.csv".into());

    let reviews = store::load_reviews(&input)?;
    tracing::info!(count = reviews.len(), input = %input, "Loaded raw reviews");

    let analyzer = SentimentAnalyzer::new();
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;

    let tagged: Vec<TaggedReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = analyzer.classify(&review.review_text);
            match sentiment {
                Sentiment::Positive => positive += 1,
                Sentiment::Neutral => neutral += 1,
                Sentiment::Negative => negative += 1,
            }
            TaggedReview::new(review, sentiment)
        })
        .collect();

    store::save_tagged(&tagged, &output)?;

    tracing::info!(
        positive,
        neutral,
        negative,
        output = %output,
        "Wrote tagged reviews"
    );
    Ok(())
}
