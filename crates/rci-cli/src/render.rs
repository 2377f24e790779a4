//! Plain-text rendering of the dashboard views.
//!
//! Every function returns a `String` so output can be asserted in tests.

use rci_analysis::{DashboardSession, PlaceholderDistribution, RowState, ViewState};
use rci_core::{AnalysisData, CompetitorAnalysis, OverallRating, Rating, RetailerConfig};

const NAME_WIDTH: usize = 26;
const OVERALL_WIDTH: usize = 22;
const ATTRIBUTE_WIDTH: usize = 17;
const BAR_WIDTH: u32 = 30;

/// Marker prefixed to the benchmarked retailer's own row.
pub(crate) const PRIMARY_MARKER: &str = "*";

/// Join rendered lines into a block ending in a newline.
pub(crate) fn block(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn rating_cell(rating: &Rating) -> String {
    format!("{} ({})", rating.category, rating.review_count)
}

fn overall_cell(rating: &OverallRating) -> String {
    format!(
        "{:.1} {} ({})",
        rating.score, rating.category, rating.review_count
    )
}

fn header(data: &AnalysisData) -> String {
    let attributes: String = data
        .attributes
        .iter()
        .map(|attribute| format!("{:<ATTRIBUTE_WIDTH$}", attribute.to_string().to_uppercase()))
        .collect();
    let line = format!(
        "  {:<NAME_WIDTH$}{:<OVERALL_WIDTH$}{attributes}",
        "COMPETITOR", "OVERALL RATING"
    );
    line.trim_end().to_string()
}

fn row(data: &AnalysisData, competitor: &CompetitorAnalysis) -> String {
    let marker = if competitor.is_primary {
        PRIMARY_MARKER
    } else {
        " "
    };
    let attributes: String = data
        .attributes
        .iter()
        .map(|attribute| {
            format!(
                "{:<ATTRIBUTE_WIDTH$}",
                rating_cell(competitor.attributes.get(*attribute))
            )
        })
        .collect();
    let line = format!(
        "{marker} {:<NAME_WIDTH$}{:<OVERALL_WIDTH$}{attributes}",
        competitor.name,
        overall_cell(&competitor.overall_rating)
    );
    line.trim_end().to_string()
}

fn placeholder_chart(distribution: &PlaceholderDistribution) -> Vec<String> {
    let max = distribution.max_count().max(1);
    distribution
        .bars()
        .iter()
        .map(|&(category, count)| {
            let filled = (count * BAR_WIDTH).div_ceil(max) as usize;
            format!(
                "      {:<10}{:<width$} {count}",
                category.to_string(),
                "#".repeat(filled),
                width = BAR_WIDTH as usize
            )
        })
        .collect()
}

fn expanded_detail(
    competitor: &CompetitorAnalysis,
    distribution: Option<&PlaceholderDistribution>,
) -> Vec<String> {
    let mut lines = vec![
        "    Sentiment summary:".to_string(),
        format!("      {}", competitor.sentiment_summary),
        "    Key mentions:".to_string(),
    ];
    lines.extend(
        competitor
            .key_mentions
            .iter()
            .map(|mention| format!("      {:<16}{}", mention.term, mention.count)),
    );
    if let Some(distribution) = distribution {
        lines.push("    Rating distribution (illustrative placeholder):".to_string());
        lines.extend(placeholder_chart(distribution));
    }
    lines
}

fn comparison_lines(session: &DashboardSession, data: &AnalysisData) -> Vec<String> {
    let mut lines = vec![header(data)];
    for competitor in &data.competitors {
        lines.push(row(data, competitor));
        if session.row_state(&competitor.id) == RowState::Expanded {
            lines.extend(expanded_detail(
                competitor,
                session.placeholder(&competitor.id),
            ));
        }
    }
    lines
}

/// Render the comparison table, with detail blocks under expanded rows.
#[must_use]
pub(crate) fn render_comparison(session: &DashboardSession, data: &AnalysisData) -> String {
    block(&comparison_lines(session, data))
}

/// One-line retailer picker; the selected retailer is bracketed.
fn retailer_selector(session: &DashboardSession) -> String {
    let selected = session.selected_retailer().map(|r| r.id.as_str());
    let options: Vec<String> = session
        .retailers()
        .iter()
        .map(|retailer| {
            let label = format!("{} {}", retailer.id, retailer.primary_display_name());
            if Some(retailer.id.as_str()) == selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    format!("Switch:   {}", options.join(" | "))
}

/// Render the whole marketing view: selection summary plus the current state.
#[must_use]
pub(crate) fn render_marketing_view(session: &DashboardSession) -> String {
    let mut lines = vec!["# Competitor Review Analysis".to_string(), String::new()];
    if let Some(retailer) = session.selected_retailer() {
        lines.push(format!("Retailer: {}", retailer.name));
    }
    lines.push(format!("Period:   {}", period_label(session.time_period())));
    if session.retailers().len() > 1 {
        lines.push(retailer_selector(session));
    }
    lines.push(String::new());

    match session.state() {
        ViewState::Loading => lines.push("Loading analysis...".to_string()),
        ViewState::Empty => lines.push("No analysis data available.".to_string()),
        ViewState::Loaded(data) => {
            lines.extend(comparison_lines(session, data));
            lines.push(String::new());
            lines.push(format!("Rows marked {PRIMARY_MARKER} belong to your retailer."));
        }
    }
    block(&lines)
}

/// Human label for a period value; unknown values are shown as-is.
#[must_use]
pub(crate) fn period_label(period: &str) -> &str {
    rci_analysis::TIME_PERIODS
        .iter()
        .find(|(value, _)| *value == period)
        .map_or(period, |(_, label)| *label)
}

/// Render catalog entries as a table.
#[must_use]
pub(crate) fn render_retailers(retailers: &[&RetailerConfig]) -> String {
    let mut lines = vec![format!("{:<6}{:<42}COMPETITORS", "ID", "NAME")];
    lines.extend(retailers.iter().map(|retailer| {
        format!(
            "{:<6}{:<42}{}",
            retailer.id, retailer.name, retailer.tracked_competitors
        )
    }));
    block(&lines)
}
