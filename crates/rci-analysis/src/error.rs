use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("unknown retailer: {0}")]
    UnknownRetailer(String),

    #[error("no comparison row with id {0}")]
    UnknownRow(String),

    #[error("no analysis loaded")]
    NotLoaded,
}
