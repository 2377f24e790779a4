use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How a dashboard treats an analysis response that arrives after a newer
/// request was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreshnessPolicy {
    /// Drop responses whose request is no longer the latest one issued.
    #[default]
    LatestOnly,
    /// Apply every response in arrival order; a slow older response can
    /// overwrite newer data.
    LastWriteWins,
}

impl std::fmt::Display for FreshnessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessPolicy::LatestOnly => write!(f, "latest-only"),
            FreshnessPolicy::LastWriteWins => write!(f, "last-write-wins"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub retailers_path: PathBuf,
    /// Minimum simulated latency of an analysis fetch.
    pub fetch_min_delay_ms: u64,
    /// Upper bound of the random latency added on top of `fetch_min_delay_ms`.
    pub fetch_jitter_ms: u64,
    /// Seed for the analysis generator; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub freshness: FreshnessPolicy,
}
