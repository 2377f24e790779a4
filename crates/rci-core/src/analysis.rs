use serde::{Deserialize, Serialize};

use crate::ratings::{Attribute, AttributeRatings, OverallRating};
use crate::retailers::Retailer;

/// A frequency-counted term pulled from reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMention {
    pub term: String,
    pub count: u32,
}

/// Review analysis for one entity in a comparison, either the retailer being
/// benchmarked (`is_primary`) or one of its competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub id: String,
    pub name: String,
    pub is_primary: bool,
    pub overall_rating: OverallRating,
    pub attributes: AttributeRatings,
    pub sentiment_summary: String,
    pub key_mentions: Vec<KeyMention>,
}

/// A full comparison for one retailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub retailer: Retailer,
    /// Primary entity plus competitors, most-reviewed first.
    pub competitors: Vec<CompetitorAnalysis>,
    /// Column order for the per-attribute ratings.
    pub attributes: Vec<Attribute>,
}

impl AnalysisData {
    /// The entry flagged as the benchmarked retailer.
    #[must_use]
    pub fn primary(&self) -> Option<&CompetitorAnalysis> {
        self.competitors.iter().find(|c| c.is_primary)
    }

    #[must_use]
    pub fn competitor(&self, id: &str) -> Option<&CompetitorAnalysis> {
        self.competitors.iter().find(|c| c.id == id)
    }

    /// Returns `true` when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}
