//! Random rating assignment.
//!
//! Every function takes the random source explicitly so callers can seed it.

use rand::Rng;
use rci_core::{OverallRating, Rating, RatingCategory};

/// Smallest review count a generated rating can carry.
pub const MIN_REVIEW_COUNT: u32 = 10;
/// Largest review count a generated rating can carry.
pub const MAX_REVIEW_COUNT: u32 = 209;

/// Draw a random [`Rating`].
///
/// The category comes from one uniform draw in `[0, 1)` mapped through
/// [`RatingCategory::from_draw`]; the review count is a second, independent
/// uniform draw in `[10, 209]`.
pub fn assign_rating<R: Rng + ?Sized>(rng: &mut R) -> Rating {
    let category = RatingCategory::from_draw(rng.random::<f64>());
    let review_count = rng.random_range(MIN_REVIEW_COUNT..=MAX_REVIEW_COUNT);
    Rating {
        category,
        review_count,
    }
}

/// Draw a random [`OverallRating`]: a [`Rating`] plus a star score sampled
/// uniformly inside the category's bucket and rounded to one decimal.
pub fn assign_overall_rating<R: Rng + ?Sized>(rng: &mut R) -> OverallRating {
    let rating = assign_rating(rng);
    let score = score_for(rating.category, rng.random::<f64>());
    OverallRating {
        score,
        category: rating.category,
        review_count: rating.review_count,
    }
}

/// Place a unit draw `u` in `[0, 1)` inside `category`'s score bucket.
#[must_use]
pub fn score_for(category: RatingCategory, u: f64) -> f64 {
    let (low, width) = category.score_bucket();
    round_to_tenth(low + u * width)
}

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
