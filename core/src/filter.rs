// Filter engine
//
// Category and sentiment multi-selects with an "All" sentinel plus an
// optional inclusive date range, AND-composed over the review table.

use chrono::NaiveDate;

use crate::model::TaggedReview;

/// Sentinel select-all value for the multi-select filters.
pub const ALL: &str = "All";

/// One filter selection as received from the dashboard UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewFilter {
    /// Selected categories; empty or containing "All" selects everything
    pub categories: Vec<String>,
    /// Selected sentiment labels; same sentinel rule
    pub sentiments: Vec<String>,
    /// Range start; filtering applies only when both endpoints are set
    pub start_date: Option<NaiveDate>,
    /// Range end, inclusive
    pub end_date: Option<NaiveDate>,
}

impl ReviewFilter {
    /// Filter that selects the full table.
    pub fn all() -> Self {
        Self {
            categories: vec![ALL.to_string()],
            sentiments: vec![ALL.to_string()],
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sentiments<I, S>(mut self, sentiments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sentiments = sentiments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Whether a single review passes every active filter dimension.
    pub fn matches(&self, review: &TaggedReview) -> bool {
        if !selection_passes(&self.categories, &review.category) {
            return false;
        }
        if !selection_passes(&self.sentiments, review.sentiment.label()) {
            return false;
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if review.review_date < start || review.review_date > end {
                return false;
            }
        }
        true
    }

    /// The filtered subset, in table order.
    pub fn apply<'a>(&self, reviews: &'a [TaggedReview]) -> Vec<&'a TaggedReview> {
        reviews.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Multi-select rule: an empty selection or one containing the "All"
/// sentinel passes every value.
fn selection_passes(selection: &[String], value: &str) -> bool {
    if selection.is_empty() || selection.iter().any(|s| s == ALL) {
        return true;
    }
    selection.iter().any(|s| s == value)
}
