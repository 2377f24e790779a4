use serde::{Deserialize, Serialize};

/// Quality bucket for a rating, best first.
///
/// Variant order is significant: `Excellent < Good < Average < Poor` under
/// the derived `Ord`, so sorting ascending lists the best category first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingCategory {
    Excellent,
    Good,
    Average,
    Poor,
}

impl RatingCategory {
    /// All categories in descending quality order.
    pub const ALL: [RatingCategory; 4] = [
        RatingCategory::Excellent,
        RatingCategory::Good,
        RatingCategory::Average,
        RatingCategory::Poor,
    ];

    /// Map a uniform draw in `[0, 1)` onto a category.
    ///
    /// Cut points are exclusive lower bounds: `r > 0.8` is Excellent,
    /// `r > 0.5` Good, `r > 0.2` Average, anything else Poor. This yields a
    /// 20/30/30/20 split.
    #[must_use]
    pub fn from_draw(r: f64) -> Self {
        if r > 0.8 {
            RatingCategory::Excellent
        } else if r > 0.5 {
            RatingCategory::Good
        } else if r > 0.2 {
            RatingCategory::Average
        } else {
            RatingCategory::Poor
        }
    }

    /// Lower bound and width of the overall-score bucket for this category.
    ///
    /// Excellent covers `[4.5, 5.0]`, Good `[3.5, 4.5)`, Average `[2.5, 3.5)`,
    /// Poor `[1.0, 2.5)`.
    #[must_use]
    pub fn score_bucket(self) -> (f64, f64) {
        match self {
            RatingCategory::Excellent => (4.5, 0.5),
            RatingCategory::Good => (3.5, 1.0),
            RatingCategory::Average => (2.5, 1.0),
            RatingCategory::Poor => (1.0, 1.5),
        }
    }

    /// Returns `true` if a (rounded) score falls inside this category's bucket.
    ///
    /// The upper bound is treated as inclusive because rounding to one decimal
    /// can land exactly on it (e.g. `4.46` rounds to `4.5`).
    #[must_use]
    pub fn score_in_bucket(self, score: f64) -> bool {
        let (low, width) = self.score_bucket();
        score >= low && score <= low + width
    }
}

impl std::fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingCategory::Excellent => write!(f, "Excellent"),
            RatingCategory::Good => write!(f, "Good"),
            RatingCategory::Average => write!(f, "Average"),
            RatingCategory::Poor => write!(f, "Poor"),
        }
    }
}

/// A categorical rating backed by a review count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub category: RatingCategory,
    pub review_count: u32,
}

/// A [`Rating`] with a numeric star score consistent with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallRating {
    pub score: f64,
    pub category: RatingCategory,
    pub review_count: u32,
}

impl OverallRating {
    /// The categorical part of this rating, without the score.
    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating {
            category: self.category,
            review_count: self.review_count,
        }
    }
}

/// A facet rated independently of the overall score.
///
/// Declaration order is the column order used when rendering a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Service,
    Ambiance,
    Value,
    Selection,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Service,
        Attribute::Ambiance,
        Attribute::Value,
        Attribute::Selection,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Service => write!(f, "Service"),
            Attribute::Ambiance => write!(f, "Ambiance"),
            Attribute::Value => write!(f, "Value"),
            Attribute::Selection => write!(f, "Selection"),
        }
    }
}

/// One [`Rating`] per [`Attribute`].
///
/// Every attribute always has a rating, so lookups never need a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeRatings {
    pub service: Rating,
    pub ambiance: Rating,
    pub value: Rating,
    pub selection: Rating,
}

impl AttributeRatings {
    /// Build the set by calling `rate` once per attribute, in column order.
    pub fn from_fn<F>(mut rate: F) -> Self
    where
        F: FnMut(Attribute) -> Rating,
    {
        Self {
            service: rate(Attribute::Service),
            ambiance: rate(Attribute::Ambiance),
            value: rate(Attribute::Value),
            selection: rate(Attribute::Selection),
        }
    }

    #[must_use]
    pub fn get(&self, attribute: Attribute) -> &Rating {
        match attribute {
            Attribute::Service => &self.service,
            Attribute::Ambiance => &self.ambiance,
            Attribute::Value => &self.value,
            Attribute::Selection => &self.selection,
        }
    }

    /// Iterate `(attribute, rating)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &Rating)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draw_cut_points_are_exclusive() {
        assert_eq!(RatingCategory::from_draw(0.8), RatingCategory::Good);
        assert_eq!(RatingCategory::from_draw(0.5), RatingCategory::Average);
        assert_eq!(RatingCategory::from_draw(0.2), RatingCategory::Poor);
    }

    #[test]
    fn from_draw_just_above_cut_points() {
        assert_eq!(
            RatingCategory::from_draw(0.800_000_1),
            RatingCategory::Excellent
        );
        assert_eq!(RatingCategory::from_draw(0.500_000_1), RatingCategory::Good);
        assert_eq!(
            RatingCategory::from_draw(0.200_000_1),
            RatingCategory::Average
        );
    }

    #[test]
    fn from_draw_extremes() {
        assert_eq!(RatingCategory::from_draw(0.0), RatingCategory::Poor);
        assert_eq!(
            RatingCategory::from_draw(0.999_999),
            RatingCategory::Excellent
        );
    }

    #[test]
    fn from_draw_partitions_unit_interval_20_30_30_20() {
        let mut counts = [0usize; 4];
        for i in 0..1000 {
            let r = f64::from(i) / 1000.0;
            let idx = RatingCategory::ALL
                .iter()
                .position(|c| *c == RatingCategory::from_draw(r))
                .unwrap();
            counts[idx] += 1;
        }
        // Excellent: 0.801..=0.999, Good: 0.501..=0.800, Average: 0.201..=0.500, Poor: 0.000..=0.200
        assert_eq!(counts, [199, 300, 300, 201]);
    }

    #[test]
    fn score_buckets_are_contiguous() {
        let (poor_low, poor_w) = RatingCategory::Poor.score_bucket();
        let (avg_low, avg_w) = RatingCategory::Average.score_bucket();
        let (good_low, good_w) = RatingCategory::Good.score_bucket();
        let (exc_low, exc_w) = RatingCategory::Excellent.score_bucket();
        assert!((poor_low - 1.0).abs() < f64::EPSILON);
        assert!((poor_low + poor_w - avg_low).abs() < f64::EPSILON);
        assert!((avg_low + avg_w - good_low).abs() < f64::EPSILON);
        assert!((good_low + good_w - exc_low).abs() < f64::EPSILON);
        assert!((exc_low + exc_w - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_in_bucket_accepts_rounded_upper_bound() {
        assert!(RatingCategory::Good.score_in_bucket(4.5));
        assert!(RatingCategory::Excellent.score_in_bucket(5.0));
        assert!(!RatingCategory::Poor.score_in_bucket(0.9));
        assert!(!RatingCategory::Average.score_in_bucket(3.6));
    }

    #[test]
    fn category_order_is_quality_descending() {
        let mut shuffled = vec![
            RatingCategory::Poor,
            RatingCategory::Excellent,
            RatingCategory::Average,
            RatingCategory::Good,
        ];
        shuffled.sort();
        assert_eq!(shuffled, RatingCategory::ALL.to_vec());
    }

    #[test]
    fn attribute_ratings_iterates_in_column_order() {
        let ratings = AttributeRatings::from_fn(|a| Rating {
            category: RatingCategory::Good,
            review_count: match a {
                Attribute::Service => 10,
                Attribute::Ambiance => 20,
                Attribute::Value => 30,
                Attribute::Selection => 40,
            },
        });
        let counts: Vec<u32> = ratings.iter().map(|(_, r)| r.review_count).collect();
        assert_eq!(counts, vec![10, 20, 30, 40]);
        assert_eq!(ratings.get(Attribute::Value).review_count, 30);
    }

    #[test]
    fn attribute_ratings_serializes_with_attribute_names() {
        let ratings = AttributeRatings::from_fn(|_| Rating {
            category: RatingCategory::Poor,
            review_count: 12,
        });
        let json = serde_json::to_value(ratings).unwrap();
        for attribute in Attribute::ALL {
            assert!(
                json.get(attribute.to_string()).is_some(),
                "missing key {attribute}"
            );
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(RatingCategory::Excellent.to_string(), "Excellent");
        assert_eq!(Attribute::Ambiance.to_string(), "Ambiance");
    }
}
