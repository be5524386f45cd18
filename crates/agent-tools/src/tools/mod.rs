//! Built-in tool implementations.

mod chart;
mod churn;
mod nps;
mod samples;
mod stock_price;
mod weather;

pub use chart::{CreateCustomDataset, GenerateChartData};
pub use churn::{ChurnRate, ChurnReasons};
pub use nps::{DeepDetractionRate, NpsScore};
pub use samples::{
    SampleMarketShareData, SamplePerformanceMetrics, SampleSalesData, SampleScatterData,
    SampleTimeSeriesData,
};
pub use stock_price::StockPrice;
pub use weather::Weather;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::debug;

use crate::tool::ToolOutput;

/// Human-readable "last updated" layout on metric lookups.
pub const LAST_UPDATED_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Country codes served by the metric lookups.
pub const SUPPORTED_COUNTRY_CODES: [&str; 3] = ["UK", "DE", "PT"];

/// Look up a country's record in a mock table. Codes match case-insensitively.
pub(crate) fn country_record(table: &Value, country_code: &str) -> Option<Value> {
    table.get(country_code.trim().to_uppercase()).cloned()
}

/// Add `timestamp` (and optionally `last_updated_formatted`) to a record.
pub(crate) fn stamp(record: &mut Value, now: DateTime<Utc>, with_last_updated: bool) {
    if let Some(map) = record.as_object_mut() {
        map.insert(
            "timestamp".to_string(),
            Value::String(chart_engine::format_timestamp(now)),
        );
        if with_last_updated {
            map.insert(
                "last_updated_formatted".to_string(),
                Value::String(now.format(LAST_UPDATED_FORMAT).to_string()),
            );
        }
    }
}

/// Shared body of the per-country metric tools.
///
/// `label` names the metric in the not-found message.
pub(crate) fn country_lookup(
    table: &Value,
    country_code: &str,
    label: &str,
    now: DateTime<Utc>,
    with_last_updated: bool,
) -> ToolOutput {
    match country_record(table, country_code) {
        Some(mut record) => {
            stamp(&mut record, now, with_last_updated);
            ToolOutput::json(&record)
        }
        None => {
            debug!("No {} fixture for country '{}'", label, country_code);
            ToolOutput::error_json(format!(
                "{} for Vodafone in {} not found. Supported country codes are {}.",
                label,
                country_code,
                SUPPORTED_COUNTRY_CODES.join(", ")
            ))
        }
    }
}

/// Argument schema shared by the per-country metric tools.
pub(crate) fn country_code_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "country_code": {
                "type": "string",
                "enum": SUPPORTED_COUNTRY_CODES,
                "description": "Country code (UK, DE, PT)"
            }
        },
        "required": ["country_code"]
    })
}
