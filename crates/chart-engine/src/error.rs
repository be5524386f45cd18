//! Error types for chart generation.
//!
//! The display strings are user-facing: tools return them verbatim inside an
//! `{"error": ...}` payload.

use thiserror::Error;

/// Errors produced while normalizing chart or dataset input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Textual payload was not valid JSON.
    #[error("Invalid JSON data provided")]
    InvalidJson,

    /// Input was empty.
    #[error("No data provided")]
    NoData,

    /// Input was neither a record nor a list of records.
    #[error("Data must be a list of objects or a single object")]
    InvalidShape,

    /// `create_custom_dataset` was given no points.
    #[error("No data points provided")]
    NoDataPoints,

    /// `create_custom_dataset` was given a point that is not a record.
    #[error("All data points must be dictionaries")]
    NonRecordDataPoint,
}
