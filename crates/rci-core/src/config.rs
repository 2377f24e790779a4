use crate::app_config::{AppConfig, Environment, FreshnessPolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("RCI_ENV", "development"))?;
    let log_level = or_default("RCI_LOG_LEVEL", "info");
    let retailers_path =
        PathBuf::from(or_default("RCI_RETAILERS_PATH", "./config/retailers.yaml"));

    let fetch_min_delay_ms = parse_u64("RCI_FETCH_MIN_DELAY_MS", "1000")?;
    let fetch_jitter_ms = parse_u64("RCI_FETCH_JITTER_MS", "500")?;

    let seed = match lookup("RCI_SEED") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "RCI_SEED".to_string(),
            reason: e.to_string(),
        })?),
        Err(_) => None,
    };

    let freshness = parse_freshness(&or_default("RCI_FRESHNESS", "latest-only"))?;

    Ok(AppConfig {
        env,
        log_level,
        retailers_path,
        fetch_min_delay_ms,
        fetch_jitter_ms,
        seed,
        freshness,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RCI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_freshness(s: &str) -> Result<FreshnessPolicy, ConfigError> {
    match s {
        "latest-only" => Ok(FreshnessPolicy::LatestOnly),
        "last-write-wins" => Ok(FreshnessPolicy::LastWriteWins),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RCI_FRESHNESS".to_string(),
            reason: format!("expected 'latest-only' or 'last-write-wins', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
