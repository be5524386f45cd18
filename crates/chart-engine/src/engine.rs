//! End-to-end chart generation: input normalization, inference, and the
//! result bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analysis::{analyze, DatasetProfile};
use crate::chart::{generate_description, generate_title, ChartConfig, ChartType};
use crate::error::ChartError;
use crate::value::{record_from_object, Dataset, RawRecord};
use crate::format_timestamp;

/// Chart type value that asks for inference.
pub const AUTO_CHART_TYPE: &str = "auto";

/// Caller overrides for chart generation.
///
/// Unset or empty axis, title and description fields are inferred. The chart
/// type is inferred only when unset or `"auto"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Explicit chart type, taken verbatim; `"auto"` means infer.
    pub chart_type: Option<String>,
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ChartRequest {
    /// A request with every setting inferred.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart_type(mut self, chart_type: impl Into<String>) -> Self {
        self.chart_type = Some(chart_type.into());
        self
    }

    pub fn with_x_field(mut self, field: impl Into<String>) -> Self {
        self.x_field = Some(field.into());
        self
    }

    pub fn with_y_field(mut self, field: impl Into<String>) -> Self {
        self.y_field = Some(field.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The explicit chart type, or `None` when it should be inferred.
    fn explicit_chart_type(&self) -> Option<ChartType> {
        self.chart_type
            .as_deref()
            .filter(|name| *name != AUTO_CHART_TYPE)
            .map(ChartType::from)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Full output of chart generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub chart_type: ChartType,
    pub title: String,
    pub description: String,
    pub config: ChartConfig,
    pub data_analysis: DatasetProfile,
    /// UTC generation time, `YYYY-MM-DDTHH:MM:SSZ`. Advisory only.
    pub timestamp: String,
    pub total_data_points: usize,
}

/// Normalize raw input into a list of records.
///
/// Accepts a JSON text payload, a single object, or an array of objects.
/// Records are returned untouched, nested values included.
pub fn normalize_input(data: &Value) -> Result<Vec<RawRecord>, ChartError> {
    let parsed;
    let data = match data {
        Value::String(text) => {
            if text.trim().is_empty() {
                return Err(ChartError::NoData);
            }
            parsed = serde_json::from_str::<Value>(text).map_err(|_| ChartError::InvalidJson)?;
            &parsed
        }
        other => other,
    };

    match data {
        Value::Null => Err(ChartError::NoData),
        Value::String(s) if s.is_empty() => Err(ChartError::NoData),
        Value::Object(map) if map.is_empty() => Err(ChartError::NoData),
        Value::Array(items) if items.is_empty() => Err(ChartError::NoData),
        Value::Object(map) => Ok(vec![map.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_object().cloned().ok_or(ChartError::InvalidShape))
            .collect(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Err(ChartError::InvalidShape),
    }
}

/// Generate chart data from raw input, stamping the current time.
pub fn generate_chart_data(data: &Value, request: &ChartRequest) -> Result<ChartResult, ChartError> {
    let records = normalize_input(data)?;
    Ok(build_chart(records, request, Utc::now()))
}

/// Run inference over already-normalized records.
///
/// Explicit overrides win; otherwise the chart type comes from the detected
/// patterns and the axes from the dataset profile's suggestions. The records
/// are echoed verbatim in the config.
pub fn build_chart(records: Vec<RawRecord>, request: &ChartRequest, now: DateTime<Utc>) -> ChartResult {
    let dataset: Dataset = records.iter().map(record_from_object).collect();
    let analysis = analyze(&dataset);

    let chart_type = request
        .explicit_chart_type()
        .unwrap_or_else(|| ChartType::infer(&analysis));
    let x_field = non_empty(&request.x_field)
        .map(str::to_string)
        .or_else(|| analysis.suggested_x_field.clone());
    let y_field = non_empty(&request.y_field)
        .map(str::to_string)
        .or_else(|| analysis.suggested_y_field.clone());

    debug!(
        "Resolved chart: type={}, x={:?}, y={:?}",
        chart_type, x_field, y_field
    );

    let total_data_points = records.len();
    let config = ChartConfig::new(chart_type.clone(), records, x_field, y_field);

    let title = non_empty(&request.title)
        .map(str::to_string)
        .unwrap_or_else(|| generate_title(&config, &analysis));
    let description = non_empty(&request.description)
        .map(str::to_string)
        .unwrap_or_else(|| generate_description(&analysis));

    ChartResult {
        chart_type,
        title,
        description,
        config,
        data_analysis: analysis,
        timestamp: format_timestamp(now),
        total_data_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_single_object() {
        let dataset = normalize_input(&json!({"a": 1})).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_normalize_json_text() {
        let dataset = normalize_input(&json!(r#"[{"a": 1}, {"a": 2}]"#)).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_normalize_errors() {
        assert_eq!(normalize_input(&json!("not json")), Err(ChartError::InvalidJson));
        assert_eq!(normalize_input(&json!("")), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!("   ")), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!("[]")), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!([])), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!({})), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!(null)), Err(ChartError::NoData));
        assert_eq!(normalize_input(&json!(42)), Err(ChartError::InvalidShape));
        assert_eq!(normalize_input(&json!("42")), Err(ChartError::InvalidShape));
        assert_eq!(normalize_input(&json!([1, 2])), Err(ChartError::InvalidShape));
        assert_eq!(
            normalize_input(&json!([{"a": 1}, "b"])),
            Err(ChartError::InvalidShape)
        );
    }

    #[test]
    fn test_overrides_win() {
        let dataset = normalize_input(&json!([
            {"date": "2024-01", "rate": 1.0, "other": 5},
            {"date": "2024-02", "rate": 2.0, "other": 6},
        ]))
        .unwrap();
        let request = ChartRequest::new()
            .with_chart_type("radar")
            .with_x_field("other")
            .with_y_field("missing")
            .with_title("Custom")
            .with_description("Mine");
        let result = build_chart(dataset, &request, Utc::now());

        assert_eq!(result.chart_type, ChartType::Other("radar".to_string()));
        assert_eq!(result.config.x_field.as_deref(), Some("other"));
        assert_eq!(result.config.y_field.as_deref(), Some("missing"));
        assert_eq!(result.config.options, json!({}));
        assert_eq!(result.title, "Custom");
        assert_eq!(result.description, "Mine");
    }

    #[test]
    fn test_auto_and_empty_fields_infer() {
        let dataset = normalize_input(&json!([
            {"date": "2024-01", "rate": 1.0},
            {"date": "2024-02", "rate": 2.0},
        ]))
        .unwrap();
        let request = ChartRequest::new()
            .with_chart_type("auto")
            .with_x_field("")
            .with_title("");
        let result = build_chart(dataset, &request, Utc::now());
        assert_eq!(result.chart_type, ChartType::Line);
        assert_eq!(result.config.x_field.as_deref(), Some("date"));
        assert_eq!(result.title, "Rate Over Time");
    }

    #[test]
    fn test_empty_chart_type_is_taken_verbatim() {
        let records = normalize_input(&json!([
            {"date": "2024-01", "rate": 1.0},
            {"date": "2024-02", "rate": 2.0},
        ]))
        .unwrap();
        let result = build_chart(records, &ChartRequest::new().with_chart_type(""), Utc::now());
        assert_eq!(result.chart_type, ChartType::Other(String::new()));
        assert_eq!(result.config.options, json!({}));
        assert_eq!(result.title, " Chart");
    }

    #[test]
    fn test_nested_values_echo_unchanged() {
        let data = json!([
            {"label": "a", "meta": {"k": 1}},
            {"label": "b", "meta": [1, 2]},
        ]);
        let result = generate_chart_data(&data, &ChartRequest::new()).unwrap();
        let config = serde_json::to_value(&result.config).unwrap();
        assert_eq!(config["data"], data);
    }

    #[test]
    fn test_timestamp_format() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:34:56Z")
            .unwrap()
            .with_timezone(&Utc);
        let dataset = normalize_input(&json!({"a": 1})).unwrap();
        let result = build_chart(dataset, &ChartRequest::new(), now);
        assert_eq!(result.timestamp, "2024-05-01T12:34:56Z");
        assert_eq!(result.total_data_points, 1);
    }
}
