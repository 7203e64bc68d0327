// Synthetic review generator
//
// Samples N review rows from fixed category/product tables. Texts come
// from sentiment-bearing phrase pools so the tagger sees all three labels.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::Review;

/// Category -> products table. Mirrors the seed dataset of the pipeline.
const CATALOG: &[(&str, &[&str])] = &[
    ("Baby Gear", &["Walker", "Stroller", "Car Seat"]),
    ("Furniture", &["Cradle", "High Chair", "Study Table"]),
    ("Battery Operated", &["Car", "Bike", "Jeep"]),
    ("Baby Safety", &["Safety Gate", "Bed Rail"]),
    ("Toys", &["Scooter", "Ride-on"]),
];

const POSITIVE_PHRASES: &[&str] = &[
    "Absolutely love this {product}, excellent build and my kid is delighted.",
    "Great {product}, sturdy and easy to assemble, highly recommend it.",
    "The {product} is fantastic, smooth wheels and very comfortable.",
    "Really happy with this {product}, solid quality and worth the price.",
    "Best {product} we have owned, safe and reliable every day.",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "Terrible {product}, it broke within a week and feels flimsy.",
    "Very disappointed, the {product} arrived scratched and wobbly.",
    "The {product} is cheap plastic, bad straps and a waste of money.",
    "Awful experience, the {product} got stuck constantly so we returned it.",
    "Poor quality {product}, parts were missing and support was useless.",
];

const NEUTRAL_PHRASES: &[&str] = &[
    "The {product} arrived on the stated date in standard packaging.",
    "This {product} replaced our older model from the same brand.",
    "We picked the {product} after comparing a few listed options.",
    "The {product} matches the photos and came with the usual manual.",
    "Bought the {product} during the seasonal sale for our second child.",
];

/// Seedable generator for synthetic review rows.
pub struct ReviewGenerator {
    rng: StdRng,
    reference_date: NaiveDate,
}

impl ReviewGenerator {
    /// Entropy-seeded generator anchored at today.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Fixed seed for reproducible datasets.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Anchor the one-year date window at a specific date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Generate `count` review rows.
    pub fn generate(&mut self, count: usize) -> Vec<Review> {
        (0..count).map(|i| self.generate_one(i)).collect()
    }

    fn generate_one(&mut self, index: usize) -> Review {
        let (category, products) = CATALOG[self.rng.gen_range(0..CATALOG.len())];
        let product = products[self.rng.gen_range(0..products.len())];

        // Id prefix is the first two letters of the category, uppercased
        let prefix: String = category.chars().take(2).collect::<String>().to_uppercase();
        let product_id = format!("{}_{:05}", prefix, index);

        let phrase_pool = match self.rng.gen_range(0..3) {
            0 => POSITIVE_PHRASES,
            1 => NEGATIVE_PHRASES,
            _ => NEUTRAL_PHRASES,
        };
        let template = phrase_pool[self.rng.gen_range(0..phrase_pool.len())];
        let review_text = template.replace("{product}", &product.to_lowercase());

        let days_back = self.rng.gen_range(0..365i64);
        let review_date = self.reference_date - Duration::days(days_back);

        let rating = self.rng.gen_range(1..=5u8);

        Review {
            product_id,
            product_name: product.to_string(),
            category: category.to_string(),
            review_text,
            review_date,
            rating,
        }
    }

    /// Fixed category names of the catalog.
    pub fn categories() -> Vec<&'static str> {
        CATALOG.iter().map(|(c, _)| *c).collect()
    }

    /// Products listed under a category, if the category exists.
    pub fn products_of(category: &str) -> Option<&'static [&'static str]> {
        CATALOG
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| *p)
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}
