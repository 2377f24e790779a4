//! Simulated analysis backend.
//!
//! Stands in for a remote review-analysis API: every fetch logs the request,
//! sleeps for a randomized latency, then returns freshly generated data.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rci_core::{AnalysisData, AppConfig, Retailer};

use crate::generator::generate_analysis;

/// Simulated latency of a fetch: `min_delay` plus up to, but not including, `jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    pub min_delay: Duration,
    pub jitter: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(1_000),
            jitter: Duration::from_millis(500),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            min_delay: Duration::from_millis(config.fetch_min_delay_ms),
            jitter: Duration::from_millis(config.fetch_jitter_ms),
        }
    }

    /// No simulated latency.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Pick a latency in `[min_delay, min_delay + jitter)` at millisecond granularity.
    ///
    /// A zero jitter returns `min_delay` without drawing from `rng`.
    pub fn sample_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.min_delay;
        }
        self.min_delay + Duration::from_millis(rng.random_range(0..jitter_ms))
    }
}

/// Mock review-analysis backend with its own seedable random source.
#[derive(Debug)]
pub struct MockAnalysisService {
    config: FetchConfig,
    rng: Mutex<StdRng>,
}

impl MockAnalysisService {
    /// Service seeded from the operating system.
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Service whose output is fully determined by `seed`.
    #[must_use]
    pub fn seeded(config: FetchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        let fetch = FetchConfig::from_app_config(config);
        match config.seed {
            Some(seed) => Self::seeded(fetch, seed),
            None => Self::new(fetch),
        }
    }

    #[must_use]
    pub fn config(&self) -> FetchConfig {
        self.config
    }

    /// Fetch a competitive review analysis for `retailer` over `time_period`.
    ///
    /// `time_period` is only logged; the mock data does not depend on it.
    /// This call cannot fail.
    pub async fn fetch_review_analysis(
        &self,
        retailer: &Retailer,
        time_period: &str,
    ) -> AnalysisData {
        tracing::info!(
            retailer = %retailer.name,
            period = time_period,
            "fetching review analysis"
        );

        let delay = self.with_rng(|rng| self.config.sample_delay(rng));
        tokio::time::sleep(delay).await;

        let data = self.with_rng(|rng| generate_analysis(retailer, rng));
        tracing::debug!(
            retailer = %retailer.id,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            rows = data.competitors.len(),
            "review analysis ready"
        );
        data
    }

    // The lock is never held across an await.
    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn luxe() -> Retailer {
        Retailer::new("1", "Westfield Mall - Luxe Apparel")
    }

    #[test]
    fn default_delay_is_one_to_one_and_a_half_seconds() {
        let config = FetchConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let delay = config.sample_delay(&mut rng);
            assert!(delay >= Duration::from_millis(1_000));
            assert!(delay < Duration::from_millis(1_500));
        }
    }

    #[test]
    fn jitter_upper_bound_is_exclusive() {
        let config = FetchConfig {
            min_delay: Duration::from_millis(100),
            jitter: Duration::from_millis(1),
        };
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            assert_eq!(config.sample_delay(&mut rng), Duration::from_millis(100));
        }
    }

    #[test]
    fn zero_jitter_leaves_rng_untouched() {
        let mut used = StdRng::seed_from_u64(6);
        let mut fresh = StdRng::seed_from_u64(6);
        let _ = FetchConfig::immediate().sample_delay(&mut used);
        assert_eq!(used.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn immediate_config_has_zero_delay() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            FetchConfig::immediate().sample_delay(&mut rng),
            Duration::ZERO
        );
    }

    #[tokio::test]
    async fn fetch_returns_analysis_for_retailer() {
        let service = MockAnalysisService::seeded(FetchConfig::immediate(), 3);
        let data = service.fetch_review_analysis(&luxe(), "1y").await;
        assert_eq!(data.retailer, luxe());
        assert_eq!(data.primary().unwrap().name, "Luxe Apparel");
        assert!((6..=8).contains(&data.competitors.len()));
    }

    #[tokio::test]
    async fn seeded_services_agree() {
        let a = MockAnalysisService::seeded(FetchConfig::immediate(), 42);
        let b = MockAnalysisService::seeded(FetchConfig::immediate(), 42);
        let first = a.fetch_review_analysis(&luxe(), "2y").await;
        let second = b.fetch_review_analysis(&luxe(), "2y").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn fetch_waits_at_least_min_delay() {
        let config = FetchConfig {
            min_delay: Duration::from_millis(30),
            jitter: Duration::from_millis(10),
        };
        let service = MockAnalysisService::seeded(config, 4);
        let started = Instant::now();
        let _ = service.fetch_review_analysis(&luxe(), "3y").await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn fetch_accepts_unvalidated_period() {
        let service = MockAnalysisService::seeded(FetchConfig::immediate(), 5);
        let data = service.fetch_review_analysis(&luxe(), "forever").await;
        assert_eq!(data.primary().map(|p| p.is_primary), Some(true));
    }

    #[test]
    fn from_app_config_uses_delays() {
        let config = AppConfig {
            env: rci_core::Environment::Test,
            log_level: "info".to_string(),
            retailers_path: "./config/retailers.yaml".into(),
            fetch_min_delay_ms: 250,
            fetch_jitter_ms: 0,
            seed: Some(9),
            freshness: rci_core::FreshnessPolicy::LatestOnly,
        };
        let service = MockAnalysisService::from_app_config(&config);
        assert_eq!(service.config().min_delay, Duration::from_millis(250));
        assert_eq!(service.config().jitter, Duration::ZERO);
    }
}
