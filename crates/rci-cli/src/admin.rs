//! Admin panel: data-source sync and the tracked-entity overview.

use std::time::Duration;

use clap::Args;
use rci_core::{AppConfig, RetailerConfig};

use crate::render::block;

/// How long a simulated manual sync takes.
pub(crate) const MANUAL_SYNC_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default, Args)]
pub struct AdminArgs {
    /// Run a manual data-source sync before showing the panel
    #[arg(long)]
    pub sync: bool,
}

/// Pretend to re-sync review data sources.
pub(crate) async fn run_manual_sync(duration: Duration) {
    tracing::info!(
        duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        "manual sync started"
    );
    println!("Syncing...");
    tokio::time::sleep(duration).await;
    tracing::info!("manual sync finished");
    println!("Sync complete.");
}

#[must_use]
pub(crate) fn render_admin_panel(retailers: &[RetailerConfig]) -> String {
    let mut lines: Vec<String> = [
        "# Admin Panel",
        "",
        "## Data Sources",
        "Review feeds: Connected (run with --sync for a manual sync)",
        "",
        "## Reporting Configuration",
        "Scheduled reports: not configured",
        "",
        "## User Management",
        "Roles: Admin, Marketing Manager",
        "",
        "## Entities and Competitors",
        "| Entity | Tracked Competitors |",
        "|--------|---------------------|",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    lines.extend(retailers.iter().map(|retailer| {
        format!(
            "| {} | {} |",
            retailer.to_retailer().primary_display_name(),
            retailer.tracked_competitors
        )
    }));
    block(&lines)
}

/// Show the admin panel, optionally after a manual sync.
///
/// # Errors
///
/// Returns an error if the retailer catalog cannot be loaded.
pub(crate) async fn run_admin(config: &AppConfig, args: &AdminArgs) -> anyhow::Result<()> {
    let catalog = rci_core::load_retailers(&config.retailers_path)?;
    if args.sync {
        run_manual_sync(MANUAL_SYNC_DURATION).await;
        println!();
    }
    print!("{}", render_admin_panel(&catalog.retailers));
    Ok(())
}
