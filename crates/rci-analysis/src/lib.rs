//! Mock review analysis for the competitive-intelligence dashboard.
//!
//! Generates randomized comparisons of a retailer against its competitors,
//! serves them through a latency-simulating backend, and tracks the
//! comparison view's state. All randomness flows through caller-supplied or
//! explicitly seeded generators.

pub mod dashboard;
pub mod error;
pub mod generator;
pub mod placeholder;
pub mod pools;
pub mod rating;
pub mod service;

pub use dashboard::{
    DashboardSession, RefreshOutcome, RequestToken, RowState, ViewState, DEFAULT_TIME_PERIOD,
    TIME_PERIODS,
};
pub use error::AnalysisError;
pub use generator::generate_analysis;
pub use placeholder::PlaceholderDistribution;
pub use rating::{assign_overall_rating, assign_rating};
pub use service::{FetchConfig, MockAnalysisService};
