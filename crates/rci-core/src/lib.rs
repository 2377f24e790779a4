//! Domain types and configuration shared by the review-intelligence crates.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod ratings;
pub mod retailers;
pub mod roles;

use thiserror::Error;

pub use analysis::{AnalysisData, CompetitorAnalysis, KeyMention};
pub use app_config::{AppConfig, Environment, FreshnessPolicy};
pub use config::{load_app_config, load_app_config_from_env};
pub use ratings::{Attribute, AttributeRatings, OverallRating, Rating, RatingCategory};
pub use retailers::{
    load_retailers, parse_retailers, Retailer, RetailerConfig, RetailersFile, NAME_SEPARATOR,
};
pub use roles::{login, LoginError, LoginSession, Role, User};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read retailers file {path}: {source}")]
    RetailersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse retailers file: {0}")]
    RetailersFileParse(#[from] serde_yaml::Error),

    #[error("retailer catalog validation failed: {0}")]
    Validation(String),
}
