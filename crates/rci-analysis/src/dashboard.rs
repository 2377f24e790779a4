//! Request-scoped state of the marketing comparison view.
//!
//! A [`DashboardSession`] owns the retailer selection, the reporting period,
//! the latest loaded analysis and the expand/collapse state of each row.
//! Every refresh is tagged with a [`RequestToken`]; whether a response for an
//! older token may overwrite newer data is decided by the session's
//! [`FreshnessPolicy`].

use std::collections::BTreeMap;

use rand::Rng;
use rci_core::{AnalysisData, FreshnessPolicy, Retailer};

use crate::error::AnalysisError;
use crate::placeholder::PlaceholderDistribution;
use crate::service::MockAnalysisService;

/// Reporting period selected when a session starts.
pub const DEFAULT_TIME_PERIOD: &str = "1y";

/// Reporting periods offered to users.
pub const TIME_PERIODS: &[(&str, &str)] = &[
    ("1y", "Last 1 Year"),
    ("2y", "Last 2 Years"),
    ("3y", "Last 3 Years"),
];

/// Monotonically increasing id of a refresh within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(AnalysisData),
    /// Nothing to show: no retailer selected, or the analysis had no rows.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Collapsed,
    Expanded,
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied(RequestToken),
    /// A newer refresh was started; the response was dropped.
    Stale {
        token: RequestToken,
        latest: RequestToken,
    },
    /// There was no retailer to fetch for.
    NoRetailer(RequestToken),
}

#[derive(Debug)]
pub struct DashboardSession {
    retailers: Vec<Retailer>,
    selected: Option<usize>,
    time_period: String,
    policy: FreshnessPolicy,
    issued: u64,
    state: ViewState,
    expanded: BTreeMap<String, PlaceholderDistribution>,
}

impl DashboardSession {
    /// Start a session over `retailers`, selecting the first one.
    #[must_use]
    pub fn new(retailers: Vec<Retailer>, policy: FreshnessPolicy) -> Self {
        let selected = if retailers.is_empty() { None } else { Some(0) };
        Self {
            retailers,
            selected,
            time_period: DEFAULT_TIME_PERIOD.to_string(),
            policy,
            issued: 0,
            state: ViewState::Empty,
            expanded: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn retailers(&self) -> &[Retailer] {
        &self.retailers
    }

    #[must_use]
    pub fn selected_retailer(&self) -> Option<&Retailer> {
        self.selected.and_then(|i| self.retailers.get(i))
    }

    /// Select the retailer with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownRetailer`] if no retailer has that id;
    /// the current selection is kept.
    pub fn select_retailer(&mut self, id: &str) -> Result<(), AnalysisError> {
        let index = self
            .retailers
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AnalysisError::UnknownRetailer(id.to_string()))?;
        self.selected = Some(index);
        Ok(())
    }

    #[must_use]
    pub fn time_period(&self) -> &str {
        &self.time_period
    }

    pub fn set_time_period(&mut self, period: impl Into<String>) {
        self.time_period = period.into();
    }

    #[must_use]
    pub fn policy(&self) -> FreshnessPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&AnalysisData> {
        match &self.state {
            ViewState::Loaded(data) => Some(data),
            ViewState::Loading | ViewState::Empty => None,
        }
    }

    /// The most recently issued token, if any refresh was started.
    #[must_use]
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    /// Mark the view as loading and issue the token for a new refresh.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = ViewState::Loading;
        RequestToken(self.issued)
    }

    /// Apply the response for `token`, unless the freshness policy says it is stale.
    ///
    /// Applying new data collapses every row.
    pub fn complete_refresh(&mut self, token: RequestToken, data: AnalysisData) -> RefreshOutcome {
        let latest = RequestToken(self.issued);
        if token < latest && self.policy == FreshnessPolicy::LatestOnly {
            tracing::warn!(
                token = token.sequence(),
                latest = latest.sequence(),
                "dropping stale analysis response"
            );
            return RefreshOutcome::Stale { token, latest };
        }

        self.expanded.clear();
        self.state = if data.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Loaded(data)
        };
        RefreshOutcome::Applied(token)
    }

    /// Fetch an analysis for the selected retailer and period, then apply it.
    pub async fn refresh(&mut self, service: &MockAnalysisService) -> RefreshOutcome {
        let token = self.begin_refresh();
        let Some(retailer) = self.selected_retailer().cloned() else {
            self.state = ViewState::Empty;
            return RefreshOutcome::NoRetailer(token);
        };
        let data = service
            .fetch_review_analysis(&retailer, &self.time_period)
            .await;
        self.complete_refresh(token, data)
    }

    #[must_use]
    pub fn row_state(&self, row_id: &str) -> RowState {
        if self.expanded.contains_key(row_id) {
            RowState::Expanded
        } else {
            RowState::Collapsed
        }
    }

    /// Placeholder chart for an expanded row.
    #[must_use]
    pub fn placeholder(&self, row_id: &str) -> Option<&PlaceholderDistribution> {
        self.expanded.get(row_id)
    }

    /// Flip a row between collapsed and expanded.
    ///
    /// Expanding draws a fresh [`PlaceholderDistribution`] from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotLoaded`] when no analysis is shown, or
    /// [`AnalysisError::UnknownRow`] if the loaded analysis has no such row.
    pub fn toggle_row<R: Rng + ?Sized>(
        &mut self,
        row_id: &str,
        rng: &mut R,
    ) -> Result<RowState, AnalysisError> {
        let data = self.data().ok_or(AnalysisError::NotLoaded)?;
        if data.competitor(row_id).is_none() {
            return Err(AnalysisError::UnknownRow(row_id.to_string()));
        }

        if self.expanded.remove(row_id).is_some() {
            Ok(RowState::Collapsed)
        } else {
            self.expanded
                .insert(row_id.to_string(), PlaceholderDistribution::random(rng));
            Ok(RowState::Expanded)
        }
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
