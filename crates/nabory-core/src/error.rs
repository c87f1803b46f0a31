//! Error types for the normalisers.

use thiserror::Error;

/// A non-empty salary string that matches none of the recognised shapes.
///
/// Carries the cleaned text so the grammar can be extended for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized salary format: {cleaned:?}")]
pub struct ParseError {
    pub cleaned: String,
}

/// A [`ParseError`] located at a row of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: ParseError,
}

/// Failure to read an employment fraction ("wymiar etatu").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    #[error("workload is empty")]
    Empty,
    #[error("unrecognized workload format: {0:?}")]
    Unrecognized(String),
    #[error("workload must be positive, got {0:?}")]
    NotPositive(String),
}
