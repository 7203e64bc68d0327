// Metrics and aggregation
//
// Pure functions from the filtered review set to the dashboard view model.
// The empty filtered set is detected up front and short-circuits into a
// NoData view, so no aggregation ever runs over zero rows.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::filter::ReviewFilter;
use crate::model::{Sentiment, TaggedReview};
use crate::store::ReviewStore;

/// Message shown by the UI when the filtered set is empty.
pub const NO_DATA_MESSAGE: &str = "No data available for selected filters.";

const TOP_WORDS: usize = 10;

/// Everything the UI renders for one filter selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    /// The filters matched no rows; charts render empty
    NoData { message: String },
    /// Metrics and the six chart datasets
    Ready(DashboardData),
}

impl DashboardView {
    pub fn no_data() -> Self {
        DashboardView::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, DashboardView::NoData { .. })
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardView::Ready(data) => Some(data),
            DashboardView::NoData { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardData {
    /// Size of the filtered set
    pub total: usize,
    pub metrics: SentimentMetrics,
    /// Pie: label -> count
    pub sentiment_distribution: Vec<LabelCount>,
    /// Bar: 10 most frequent words of Negative review texts
    pub top_complaint_words: Vec<WordCount>,
    /// Grouped bar: (product, sentiment) -> count
    pub product_sentiment: Vec<ProductSentimentCount>,
    /// Bar: category -> mean rating
    pub average_rating: Vec<CategoryRating>,
    /// Line: calendar month -> count, chronological
    pub monthly_volume: Vec<MonthCount>,
    /// Grouped bar: (category, sentiment) -> count
    pub category_sentiment: Vec<CategorySentimentCount>,
}

/// Label counts plus display percentages for the metric cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentimentMetrics {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Formatted to one decimal place, e.g. "42.3%"
    pub positive_pct: String,
    pub neutral_pct: String,
    pub negative_pct: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSentimentCount {
    pub product: String,
    pub sentiment: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRating {
    pub category: String,
    /// Unrounded mean; the display layer may round
    pub average_rating: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthCount {
    /// "YYYY-MM"
    pub month: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySentimentCount {
    pub category: String,
    pub sentiment: String,
    pub count: usize,
}

/// The "(filters) -> view model" function behind the dashboard callback.
///
/// Synchronous and side-effect free; safe to call concurrently over the
/// shared read-only store.
pub fn compute_view(store: &ReviewStore, filter: &ReviewFilter) -> DashboardView {
    let filtered = filter.apply(store.reviews());
    if filtered.is_empty() {
        return DashboardView::no_data();
    }

    let (positive, neutral, negative) = sentiment_counts(&filtered);
    let total = filtered.len();

    let metrics = SentimentMetrics {
        positive,
        neutral,
        negative,
        positive_pct: percentage(positive, total),
        neutral_pct: percentage(neutral, total),
        negative_pct: percentage(negative, total),
    };

    let sentiment_distribution = Sentiment::all()
        .iter()
        .zip([positive, neutral, negative])
        .map(|(sentiment, count)| LabelCount {
            label: sentiment.label().to_string(),
            count,
        })
        .collect();

    DashboardView::Ready(DashboardData {
        total,
        metrics,
        sentiment_distribution,
        top_complaint_words: top_complaint_words(&filtered, TOP_WORDS),
        product_sentiment: product_sentiment_counts(&filtered),
        average_rating: average_rating_by_category(&filtered),
        monthly_volume: monthly_volume(&filtered),
        category_sentiment: category_sentiment_counts(&filtered),
    })
}

fn percentage(count: usize, total: usize) -> String {
    // Callers guarantee total > 0; compute_view short-circuits empty sets
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}

/// (Positive, Neutral, Negative) counts over the filtered set.
pub fn sentiment_counts(filtered: &[&TaggedReview]) -> (usize, usize, usize) {
    let mut positive = 0;
    let mut neutral = 0;
    let mut negative = 0;
    for review in filtered {
        match review.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Negative => negative += 1,
        }
    }
    (positive, neutral, negative)
}

/// Most frequent whitespace tokens of Negative review texts.
///
/// Tokens are taken verbatim (no stemming, no stop-word removal). Ties
/// keep first-encountered order: counting preserves insertion order and
/// the descending sort is stable.
pub fn top_complaint_words(filtered: &[&TaggedReview], limit: usize) -> Vec<WordCount> {
    let mut order: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for review in filtered {
        if review.sentiment != Sentiment::Negative {
            continue;
        }
        for token in review.review_text.split_whitespace() {
            if let Some(&i) = index.get(token) {
                order[i].count += 1;
            } else {
                index.insert(token.to_string(), order.len());
                order.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(limit);
    order
}

/// Row counts grouped by (product name, sentiment label).
pub fn product_sentiment_counts(filtered: &[&TaggedReview]) -> Vec<ProductSentimentCount> {
    let mut counts: BTreeMap<(String, Sentiment), usize> = BTreeMap::new();
    for review in filtered {
        *counts
            .entry((review.product_name.clone(), review.sentiment))
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((product, sentiment), count)| ProductSentimentCount {
            product,
            sentiment: sentiment.label().to_string(),
            count,
        })
        .collect()
}

/// Mean rating per category, unrounded.
pub fn average_rating_by_category(filtered: &[&TaggedReview]) -> Vec<CategoryRating> {
    let mut sums: BTreeMap<String, (u64, usize)> = BTreeMap::new();
    for review in filtered {
        let entry = sums.entry(review.category.clone()).or_insert((0, 0));
        entry.0 += review.rating as u64;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(category, (sum, count))| CategoryRating {
            category,
            average_rating: sum as f64 / count as f64,
        })
        .collect()
}

/// Review counts per calendar month, in chronological order.
pub fn monthly_volume(filtered: &[&TaggedReview]) -> Vec<MonthCount> {
    use chrono::Datelike;

    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for review in filtered {
        let key = (review.review_date.year(), review.review_date.month());
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((year, month), count)| MonthCount {
            month: format!("{:04}-{:02}", year, month),
            count,
        })
        .collect()
}

/// Row counts grouped by (category, sentiment label).
pub fn category_sentiment_counts(filtered: &[&TaggedReview]) -> Vec<CategorySentimentCount> {
    let mut counts: BTreeMap<(String, Sentiment), usize> = BTreeMap::new();
    for review in filtered {
        *counts
            .entry((review.category.clone(), review.sentiment))
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((category, sentiment), count)| CategorySentimentCount {
            category,
            sentiment: sentiment.label().to_string(),
            count,
        })
        .collect()
}
