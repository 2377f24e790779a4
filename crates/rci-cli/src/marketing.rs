//! Marketing analytics view: fetch and render a competitor comparison.

use chrono::Utc;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rci_analysis::{
    DashboardSession, FetchConfig, MockAnalysisService, RefreshOutcome, DEFAULT_TIME_PERIOD,
};
use rci_core::{AppConfig, RetailerConfig};

use crate::render::render_marketing_view;

/// Options for the comparison view.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Retailer id from the catalog (defaults to the first entry)
    #[arg(long)]
    pub retailer: Option<String>,

    /// Reporting period
    #[arg(long, default_value = DEFAULT_TIME_PERIOD, value_parser = ["1y", "2y", "3y"])]
    pub period: String,

    /// Row ids to expand (repeatable)
    #[arg(long = "expand", value_name = "ROW_ID")]
    pub expand: Vec<String>,

    /// Print the analysis as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Seed for the mock generator; overrides RCI_SEED
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            retailer: None,
            period: DEFAULT_TIME_PERIOD.to_string(),
            expand: Vec::new(),
            json: false,
            seed: None,
        }
    }
}

/// Build a session over the configured catalog and load one analysis into it.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or a requested retailer or
/// row id does not exist.
pub(crate) async fn load_session(
    config: &AppConfig,
    args: &AnalyzeArgs,
) -> anyhow::Result<DashboardSession> {
    let catalog = rci_core::load_retailers(&config.retailers_path)?;
    let retailers = catalog
        .retailers
        .iter()
        .map(RetailerConfig::to_retailer)
        .collect();

    let mut session = DashboardSession::new(retailers, config.freshness);
    tracing::debug!(policy = %session.policy(), "dashboard session created");
    if let Some(id) = args.retailer.as_deref() {
        session.select_retailer(id)?;
    }
    session.set_time_period(args.period.as_str());

    let seed = args.seed.or(config.seed);
    let service = match args.seed {
        Some(seed) => MockAnalysisService::seeded(FetchConfig::from_app_config(config), seed),
        None => MockAnalysisService::from_app_config(config),
    };

    match session.refresh(&service).await {
        RefreshOutcome::Applied(token) => {
            tracing::debug!(token = token.sequence(), "analysis applied");
        }
        RefreshOutcome::NoRetailer(_) => {
            anyhow::bail!(
                "retailer catalog is empty; add entries to {}",
                config.retailers_path.display()
            );
        }
        RefreshOutcome::Stale { token, latest } => {
            tracing::warn!(
                token = token.sequence(),
                latest = latest.sequence(),
                "refresh superseded"
            );
        }
    }

    // Placeholder charts use their own stream so expanding rows never shifts
    // the analysis draws.
    let mut decoration_rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };
    for row_id in &args.expand {
        session.toggle_row(row_id, &mut decoration_rng)?;
    }

    Ok(session)
}

/// Run the comparison view and print it to stdout.
///
/// # Errors
///
/// Returns an error if the session cannot be loaded or JSON encoding fails.
pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let session = load_session(config, args).await?;

    if args.json {
        match session.data() {
            Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
            None => println!("null"),
        }
    } else {
        println!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
        print!("{}", render_marketing_view(&session));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use rci_analysis::{RowState, ViewState};
    use rci_core::{Environment, FreshnessPolicy};

    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            retailers_path: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("config")
                .join("retailers.yaml"),
            fetch_min_delay_ms: 0,
            fetch_jitter_ms: 0,
            seed: Some(7),
            freshness: FreshnessPolicy::LatestOnly,
        }
    }

    #[tokio::test]
    async fn load_session_defaults_to_first_retailer() {
        let session = load_session(&test_config(), &AnalyzeArgs::default())
            .await
            .unwrap();
        let data = session.data().unwrap();
        assert_eq!(data.retailer.id, "1");
        assert_eq!(data.primary().unwrap().name, "Luxe Apparel");
    }

    #[tokio::test]
    async fn load_session_selects_requested_retailer_and_period() {
        let args = AnalyzeArgs {
            retailer: Some("2".to_string()),
            period: "2y".to_string(),
            ..AnalyzeArgs::default()
        };
        let session = load_session(&test_config(), &args).await.unwrap();
        assert_eq!(session.time_period(), "2y");
        assert_eq!(session.data().unwrap().primary().unwrap().name, "Gourmet Eats");
    }

    #[tokio::test]
    async fn load_session_expands_requested_rows() {
        let args = AnalyzeArgs {
            expand: vec!["1".to_string()],
            ..AnalyzeArgs::default()
        };
        let session = load_session(&test_config(), &args).await.unwrap();
        assert_eq!(session.row_state("1"), RowState::Expanded);
    }

    #[tokio::test]
    async fn load_session_rejects_unknown_retailer() {
        let args = AnalyzeArgs {
            retailer: Some("99".to_string()),
            ..AnalyzeArgs::default()
        };
        let err = load_session(&test_config(), &args).await.unwrap_err();
        assert!(err.to_string().contains("unknown retailer"));
    }

    #[tokio::test]
    async fn load_session_rejects_unknown_row() {
        let args = AnalyzeArgs {
            expand: vec!["1-99".to_string()],
            ..AnalyzeArgs::default()
        };
        let err = load_session(&test_config(), &args).await.unwrap_err();
        assert!(err.to_string().contains("1-99"));
    }

    #[tokio::test]
    async fn load_session_missing_catalog_fails() {
        let mut config = test_config();
        config.retailers_path = PathBuf::from("/nonexistent/retailers.yaml");
        assert!(load_session(&config, &AnalyzeArgs::default()).await.is_err());
    }

    #[tokio::test]
    async fn same_seed_same_session_data() {
        let a = load_session(&test_config(), &AnalyzeArgs::default())
            .await
            .unwrap();
        let b = load_session(&test_config(), &AnalyzeArgs::default())
            .await
            .unwrap();
        assert!(matches!(a.state(), ViewState::Loaded(_)));
        assert_eq!(a.data(), b.data());
    }
}
