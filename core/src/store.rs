// In-memory review store and stage-file I/O
//
// The dashboard loads the tagged csv once into a `ReviewStore` and treats
// it as read-only for the life of the process. The store is constructed
// explicitly and passed by reference into the aggregation routines, so the
// pipeline logic is testable without any HTTP or file layer.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, Writer};

use crate::model::{Review, TaggedReview};
use crate::Result;

/// Read-only collection of tagged reviews.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<TaggedReview>,
}

impl ReviewStore {
    /// Build a store from already-tagged reviews.
    pub fn from_reviews(reviews: Vec<TaggedReview>) -> Self {
        Self { reviews }
    }

    /// Load a tagged csv stage file into memory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);
        let mut reviews = Vec::new();
        for result in reader.deserialize() {
            let review: TaggedReview = result?;
            reviews.push(review);
        }
        Ok(Self { reviews })
    }

    pub fn reviews(&self) -> &[TaggedReview] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Sorted unique categories present in the data.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.reviews.iter().map(|r| r.category.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Sorted unique sentiment labels present in the data.
    pub fn sentiments(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .reviews
            .iter()
            .map(|r| r.sentiment.label())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Min and max review dates, `None` for an empty store.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.reviews.iter().map(|r| r.review_date).min()?;
        let max = self.reviews.iter().map(|r| r.review_date).max()?;
        Some((min, max))
    }
}

/// Load raw (untagged) reviews from a csv stage file.
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(file);
    let mut reviews = Vec::new();
    for result in reader.deserialize() {
        let review: Review = result?;
        reviews.push(review);
    }
    Ok(reviews)
}

/// Write raw reviews to a csv stage file.
pub fn save_reviews<P: AsRef<Path>>(reviews: &[Review], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);
    for review in reviews {
        writer.serialize(review)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write tagged reviews to a csv stage file.
pub fn save_tagged<P: AsRef<Path>>(reviews: &[TaggedReview], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);
    for review in reviews {
        writer.serialize(review)?;
    }
    writer.flush()?;
    Ok(())
}
