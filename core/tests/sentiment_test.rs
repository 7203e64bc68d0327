//! Sentiment scorer and threshold-mapping tests
//!
//! Covers:
//! - Sentiment::from_polarity: fixed thresholds, exact boundaries
//! - SentimentAnalyzer: polarity range, empty text, determinism

use reviewlens_core::sentiment::ReviewLexicon;
use reviewlens_core::{Sentiment, SentimentAnalyzer};

// =============================================================================
// Threshold mapping
// =============================================================================

#[test]
fn scores_above_threshold_are_positive() {
    assert_eq!(Sentiment::from_polarity(0.11), Sentiment::Positive);
    assert_eq!(Sentiment::from_polarity(0.5), Sentiment::Positive);
    assert_eq!(Sentiment::from_polarity(1.0), Sentiment::Positive);
}

#[test]
fn scores_below_threshold_are_negative() {
    assert_eq!(Sentiment::from_polarity(-0.11), Sentiment::Negative);
    assert_eq!(Sentiment::from_polarity(-0.5), Sentiment::Negative);
    assert_eq!(Sentiment::from_polarity(-1.0), Sentiment::Negative);
}

#[test]
fn scores_inside_band_are_neutral() {
    assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
    assert_eq!(Sentiment::from_polarity(0.05), Sentiment::Neutral);
    assert_eq!(Sentiment::from_polarity(-0.05), Sentiment::Neutral);
}

#[test]
fn exact_boundaries_are_neutral() {
    assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
    assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
}

// =============================================================================
// Analyzer
// =============================================================================

#[test]
fn empty_text_scores_zero_and_classifies_neutral() {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(analyzer.polarity(""), 0.0);
    assert_eq!(analyzer.classify(""), Sentiment::Neutral);
}

#[test]
fn text_without_lexicon_words_is_neutral() {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(
        analyzer.classify("the package arrived on a tuesday"),
        Sentiment::Neutral
    );
}

#[test]
fn positive_review_classifies_positive() {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(
        analyzer.classify("Excellent stroller, sturdy and great value, highly recommend"),
        Sentiment::Positive
    );
}

#[test]
fn negative_review_classifies_negative() {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(
        analyzer.classify("Terrible walker, flimsy and broke in a week, awful"),
        Sentiment::Negative
    );
}

#[test]
fn polarity_stays_in_range() {
    let analyzer = SentimentAnalyzer::new();
    for text in [
        "excellent amazing fantastic perfect wonderful love best",
        "terrible horrible awful worst hate useless garbage",
        "",
        "very extremely absolutely",
    ] {
        let score = analyzer.polarity(text);
        assert!((-1.0..=1.0).contains(&score), "score {} for {:?}", score, text);
    }
}

#[test]
fn default_lexicon_is_populated() {
    let lexicon = ReviewLexicon::new();
    assert!(!lexicon.is_empty());
    assert!(lexicon.len() > 30, "lexicon has {} entries", lexicon.len());
}

#[test]
fn analyzer_accepts_an_explicit_lexicon() {
    let analyzer = SentimentAnalyzer::new().with_lexicon(ReviewLexicon::default());
    assert_eq!(analyzer.classify("great walker"), Sentiment::Positive);
    assert_eq!(analyzer.classify("terrible walker"), Sentiment::Negative);
}

#[test]
fn zero_negation_window_disables_inversion() {
    let analyzer = SentimentAnalyzer::new().with_negation_window(0);
    // "not" is seen but the window never covers the following word
    assert!(analyzer.polarity("not good") > 0.0);

    let default_window = SentimentAnalyzer::new();
    assert!(default_window.polarity("not good") < 0.0);
}

#[test]
fn same_text_always_scores_the_same() {
    let analyzer = SentimentAnalyzer::new();
    let text = "Great high chair but the tray is a bit flimsy";
    let first = analyzer.polarity(text);
    for _ in 0..10 {
        assert_eq!(analyzer.polarity(text), first);
    }
}
