//! Mock competitive analysis generation.

use std::cmp::Reverse;
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;
use rci_core::{AnalysisData, Attribute, AttributeRatings, CompetitorAnalysis, KeyMention, Retailer};

use crate::pools::{
    COMPETITOR_NAMES, KEY_MENTIONS, KEY_MENTIONS_PER_ROW, MAX_COMPETITORS, MIN_COMPETITORS,
    PRIMARY_SENTIMENT_SUMMARY, SENTIMENT_SUMMARIES,
};
use crate::rating::{assign_overall_rating, assign_rating};

/// Multiplier range `[0.5, 1.0)` applied to competitor key-mention counts.
const COMPETITOR_MENTION_SCALE: Range<f64> = 0.5..1.0;
/// Multiplier range `[0.8, 1.2)` applied to the primary retailer's key-mention counts.
const PRIMARY_MENTION_SCALE: Range<f64> = 0.8..1.2;

/// Generate a comparison of `retailer` against a random number of competitors.
///
/// Draw order is fixed so a seeded `rng` always yields the same result:
///
/// 1. Competitor count: `5 + random(0..=2)`, taken as a prefix of
///    [`COMPETITOR_NAMES`].
/// 2. Per competitor, in catalog order: one rating per attribute, the
///    overall rating, then key mentions scaled into `[0.5, 1.0)`.
/// 3. The primary row: attributes, overall rating, key mentions scaled into
///    `[0.8, 1.2)`.
///
/// Rows are then stable-sorted by overall review count, most-reviewed first.
pub fn generate_analysis<R: Rng + ?Sized>(retailer: &Retailer, rng: &mut R) -> AnalysisData {
    let competitor_count = rng.random_range(MIN_COMPETITORS..=MAX_COMPETITORS);

    let mut rows: Vec<CompetitorAnalysis> = Vec::with_capacity(competitor_count + 1);
    let mut competitors: Vec<CompetitorAnalysis> = COMPETITOR_NAMES[..competitor_count]
        .iter()
        .enumerate()
        .map(|(index, name)| CompetitorAnalysis {
            id: format!("{}-{}", retailer.id, index + 2),
            name: (*name).to_string(),
            is_primary: false,
            attributes: assign_attributes(rng),
            overall_rating: assign_overall_rating(rng),
            sentiment_summary: SENTIMENT_SUMMARIES[index % SENTIMENT_SUMMARIES.len()].to_string(),
            key_mentions: pick_key_mentions(rng, COMPETITOR_MENTION_SCALE),
        })
        .collect();

    let primary = CompetitorAnalysis {
        id: retailer.id.clone(),
        name: retailer.primary_display_name().to_string(),
        is_primary: true,
        attributes: assign_attributes(rng),
        overall_rating: assign_overall_rating(rng),
        sentiment_summary: PRIMARY_SENTIMENT_SUMMARY.to_string(),
        key_mentions: pick_key_mentions(rng, PRIMARY_MENTION_SCALE),
    };

    rows.push(primary);
    rows.append(&mut competitors);
    rows.sort_by_key(|row| Reverse(row.overall_rating.review_count));

    tracing::debug!(
        retailer = %retailer.id,
        rows = rows.len(),
        "generated mock analysis"
    );

    AnalysisData {
        retailer: retailer.clone(),
        competitors: rows,
        attributes: Attribute::ALL.to_vec(),
    }
}

fn assign_attributes<R: Rng + ?Sized>(rng: &mut R) -> AttributeRatings {
    AttributeRatings::from_fn(|_| assign_rating(rng))
}

/// Shuffle the mention pool, keep the first three, and scale each count by
/// its own multiplier drawn from `[low, low + width)`.
fn pick_key_mentions<R: Rng + ?Sized>(rng: &mut R, scale: Range<f64>) -> Vec<KeyMention> {
    let mut pool: Vec<(&str, u32)> = KEY_MENTIONS.to_vec();
    pool.shuffle(rng);
    pool.into_iter()
        .take(KEY_MENTIONS_PER_ROW)
        .map(|(term, count)| {
            let multiplier = scale.start + rng.random::<f64>() * (scale.end - scale.start);
            KeyMention {
                term: term.to_string(),
                count: scale_count(count, multiplier),
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_count(count: u32, multiplier: f64) -> u32 {
    (f64::from(count) * multiplier).floor() as u32
}
