//! Synthetic generator tests

use chrono::NaiveDate;
use reviewlens_core::ReviewGenerator;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn generates_requested_number_of_rows() {
    let mut generator = ReviewGenerator::with_seed(1);
    assert_eq!(generator.generate(250).len(), 250);
    assert!(generator.generate(0).is_empty());
}

#[test]
fn catalog_lists_the_fixed_categories() {
    let categories = ReviewGenerator::categories();
    assert_eq!(categories.len(), 5);
    assert!(categories.contains(&"Baby Gear"));
    assert!(categories.contains(&"Toys"));
    assert!(ReviewGenerator::products_of("Garden Tools").is_none());
}

#[test]
fn rows_respect_the_catalog() {
    let mut generator = ReviewGenerator::with_seed(2);
    for review in generator.generate(500) {
        let products = ReviewGenerator::products_of(&review.category)
            .unwrap_or_else(|| panic!("unknown category {}", review.category));
        assert!(products.contains(&review.product_name.as_str()));
    }
}

#[test]
fn ratings_are_between_one_and_five() {
    let mut generator = ReviewGenerator::with_seed(3);
    for review in generator.generate(500) {
        assert!((1..=5).contains(&review.rating));
    }
}

#[test]
fn product_ids_use_category_prefix_and_sequence() {
    let mut generator = ReviewGenerator::with_seed(4);
    let reviews = generator.generate(20);
    for (i, review) in reviews.iter().enumerate() {
        let expected_prefix: String = review
            .category
            .chars()
            .take(2)
            .collect::<String>()
            .to_uppercase();
        assert_eq!(
            review.product_id,
            format!("{}_{:05}", expected_prefix, i)
        );
    }
}

#[test]
fn dates_fall_in_the_trailing_year() {
    let reference = reference_date();
    let mut generator = ReviewGenerator::with_seed(5).with_reference_date(reference);
    for review in generator.generate(500) {
        assert!(review.review_date <= reference);
        assert!(review.review_date > reference - chrono::Duration::days(365));
    }
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let reference = reference_date();
    let mut a = ReviewGenerator::with_seed(42).with_reference_date(reference);
    let mut b = ReviewGenerator::with_seed(42).with_reference_date(reference);
    assert_eq!(a.generate(100), b.generate(100));
}

#[test]
fn texts_mention_the_product() {
    let mut generator = ReviewGenerator::with_seed(6);
    for review in generator.generate(100) {
        assert!(
            review
                .review_text
                .contains(&review.product_name.to_lowercase()),
            "text {:?} should mention {:?}",
            review.review_text,
            review.product_name
        );
    }
}
