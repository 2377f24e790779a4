use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "RCI_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.retailers_path,
        PathBuf::from("./config/retailers.yaml")
    );
    assert_eq!(cfg.fetch_min_delay_ms, 1000);
    assert_eq!(cfg.fetch_jitter_ms, 500);
    assert!(cfg.seed.is_none());
    assert_eq!(cfg.freshness, FreshnessPolicy::LatestOnly);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("RCI_ENV", "test");
    map.insert("RCI_LOG_LEVEL", "debug");
    map.insert("RCI_RETAILERS_PATH", "/etc/rci/retailers.yaml");
    map.insert("RCI_FETCH_MIN_DELAY_MS", "0");
    map.insert("RCI_FETCH_JITTER_MS", "25");
    map.insert("RCI_SEED", "42");
    map.insert("RCI_FRESHNESS", "last-write-wins");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Test);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.retailers_path, PathBuf::from("/etc/rci/retailers.yaml"));
    assert_eq!(cfg.fetch_min_delay_ms, 0);
    assert_eq!(cfg.fetch_jitter_ms, 25);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.freshness, FreshnessPolicy::LastWriteWins);
}

#[test]
fn build_app_config_rejects_invalid_delay() {
    let mut map = HashMap::new();
    map.insert("RCI_FETCH_MIN_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RCI_FETCH_MIN_DELAY_MS"),
        "expected InvalidEnvVar(RCI_FETCH_MIN_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_jitter() {
    let mut map = HashMap::new();
    map.insert("RCI_FETCH_JITTER_MS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RCI_FETCH_JITTER_MS"),
        "expected InvalidEnvVar(RCI_FETCH_JITTER_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_seed() {
    let mut map = HashMap::new();
    map.insert("RCI_SEED", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RCI_SEED"),
        "expected InvalidEnvVar(RCI_SEED), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_freshness() {
    let mut map = HashMap::new();
    map.insert("RCI_FRESHNESS", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RCI_FRESHNESS"),
        "expected InvalidEnvVar(RCI_FRESHNESS), got: {result:?}"
    );
}

#[test]
fn freshness_display_round_trips_through_parser() {
    for policy in [FreshnessPolicy::LatestOnly, FreshnessPolicy::LastWriteWins] {
        assert_eq!(parse_freshness(&policy.to_string()).unwrap(), policy);
    }
}
