// Review data model
//
// One entity flows through the whole pipeline: a product review. The
// generator produces `Review` rows, the tagger derives a `Sentiment` label
// for each and emits `TaggedReview` rows, the dashboard only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A synthetic product review before sentiment tagging.
///
/// Serde renames match the stage-file column headers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "Product_ID")]
    pub product_id: String,
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Review_Text")]
    pub review_text: String,
    #[serde(rename = "Review_Date")]
    pub review_date: NaiveDate,
    #[serde(rename = "Rating")]
    pub rating: u8,
}

/// A review plus its derived sentiment label.
///
/// The label is computed once by the tagger and never recomputed by the
/// dashboard. The csv crate does not support `serde(flatten)`, so the
/// review columns are repeated here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaggedReview {
    #[serde(rename = "Product_ID")]
    pub product_id: String,
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Review_Text")]
    pub review_text: String,
    #[serde(rename = "Review_Date")]
    pub review_date: NaiveDate,
    #[serde(rename = "Rating")]
    pub rating: u8,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
}

impl TaggedReview {
    /// Attach a sentiment label to a raw review.
    pub fn new(review: Review, sentiment: Sentiment) -> Self {
        Self {
            product_id: review.product_id,
            product_name: review.product_name,
            category: review.category,
            review_text: review.review_text,
            review_date: review.review_date,
            rating: review.rating,
            sentiment,
        }
    }
}

/// Three-bucket sentiment label.
///
/// Ordering is the display order used on the grouped chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a polarity score in [-1, 1] to a label.
    ///
    /// Total over all inputs: scores at exactly 0.1 or -0.1 are Neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.1 {
            Sentiment::Positive
        } else if score < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// All labels in display order.
    pub fn all() -> [Sentiment; 3] {
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
