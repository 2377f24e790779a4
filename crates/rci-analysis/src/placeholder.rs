//! Decorative rating-distribution bars for an expanded comparison row.
//!
//! These numbers are random filler for the chart area. They are NOT derived
//! from the row's ratings and must not be presented as a statistic.

use rand::Rng;
use rci_core::RatingCategory;

/// Inclusive count range per bar, in [`RatingCategory::ALL`] order.
const BAR_RANGES: [(u32, u32); 4] = [(5, 54), (10, 109), (2, 31), (1, 15)];

/// Four random bar heights, one per rating category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderDistribution {
    bars: [(RatingCategory, u32); 4],
}

impl PlaceholderDistribution {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bars = [(RatingCategory::Excellent, 0); 4];
        for (slot, (category, (low, high))) in bars
            .iter_mut()
            .zip(RatingCategory::ALL.into_iter().zip(BAR_RANGES))
        {
            *slot = (category, rng.random_range(low..=high));
        }
        Self { bars }
    }

    /// Bars in descending quality order.
    #[must_use]
    pub fn bars(&self) -> &[(RatingCategory, u32)] {
        &self.bars
    }

    /// Tallest bar, used to scale a rendered chart.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.bars.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}
