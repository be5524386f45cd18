//! Chart-data inference for arbitrary record sets.
//!
//! Given a loosely structured collection of records, this crate:
//!
//! - classifies every field ([`classify`]) as numeric, categorical, text,
//!   date, datetime, or unknown, with percentage/currency flags and stats;
//! - aggregates the field profiles into a [`DatasetProfile`] with detected
//!   [`DataPattern`]s and suggested axes ([`analyze`]);
//! - resolves a [`ChartType`] and axis fields, caller overrides first;
//! - emits a renderer-ready [`ChartConfig`] plus a generated title and
//!   description ([`generate_chart_data`]).
//!
//! Everything here is synchronous and stateless. The only impure input is
//! the wall-clock timestamp stamped on results.
//!
//! # Example
//!
//! ```rust
//! use chart_engine::{generate_chart_data, ChartRequest, ChartType};
//! use serde_json::json;
//!
//! let data = json!([
//!     {"date": "2024-01", "rate": 12.0},
//!     {"date": "2024-02", "rate": 11.5},
//! ]);
//! let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
//! assert_eq!(result.chart_type, ChartType::Line);
//! assert_eq!(result.title, "Rate Over Time");
//! ```

mod analysis;
mod chart;
mod classifier;
mod dataset;
mod engine;
mod error;
mod value;

use chrono::{DateTime, Utc};

pub use analysis::{analyze, DataPattern, DatasetProfile};
pub use chart::{
    chart_options, field_label, generate_description, generate_title, ChartConfig, ChartType,
};
pub use classifier::{
    classify, FieldProfile, SemanticType, CATEGORICAL_UNIQUE_RATIO, DATE_PROBE_LIMIT,
    DATE_THRESHOLD, NUMERIC_THRESHOLD, SAMPLE_VALUE_LIMIT,
};
pub use dataset::{create_custom_dataset, create_custom_dataset_at, CustomDataset, DatasetMetadata};
pub use engine::{
    build_chart, generate_chart_data, normalize_input, ChartRequest, ChartResult, AUTO_CHART_TYPE,
};
pub use error::ChartError;
pub use value::{field_values, record_from_object, Dataset, RawRecord, Record, Scalar};

/// Timestamp layout used on every generated result.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a UTC instant with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
