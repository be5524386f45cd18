//! Chart generation tools backed by `chart-engine`.

use async_trait::async_trait;
use chart_engine::{create_custom_dataset, generate_chart_data, ChartRequest, AUTO_CHART_TYPE};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Turns an arbitrary record set into a renderer-ready chart.
///
/// # Parameters
///
/// - `data` (required): JSON text, a single object, or an array of objects.
/// - `chart_type` (optional): "auto" (default), "line", "bar", "pie",
///   "scatter", "multi-line" or "multi-bar".
/// - `x_field` / `y_field` (optional): Axis fields; inferred when absent.
/// - `title` / `description` (optional): Generated when absent.
///
/// # Examples
///
/// ```json
/// {"data": [{"month": "2024-01", "sales": 1000}, {"month": "2024-02", "sales": 1200}]}
/// {"data": "[{\"name\": \"A\", \"share\": \"40%\"}]", "chart_type": "pie"}
/// ```
pub struct GenerateChartData;

impl GenerateChartData {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenerateChartData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GenerateChartData {
    fn name(&self) -> &str {
        "generate_chart_data"
    }

    fn description(&self) -> &str {
        "Generate chart data from any aggregated dataset with automatic structure inference. \
         Supports line charts for time series, bar charts for categorical data, pie charts for \
         percentage breakdowns, multi-series charts and scatter plots."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "data": {
                    "description": "Input data as JSON string, object, or list of objects",
                    "anyOf": [
                        {"type": "string"},
                        {"type": "object"},
                        {"type": "array", "items": {"type": "object"}}
                    ]
                },
                "chart_type": {
                    "type": "string",
                    "enum": [AUTO_CHART_TYPE, "line", "bar", "pie", "scatter", "multi-line", "multi-bar"],
                    "default": AUTO_CHART_TYPE,
                    "description": "Chart type; \"auto\" infers it from the data"
                },
                "x_field": {"type": "string", "description": "Field for the X-axis (auto-detected if not provided)"},
                "y_field": {"type": "string", "description": "Field for the Y-axis (auto-detected if not provided)"},
                "title": {"type": "string", "description": "Chart title (auto-generated if not provided)"},
                "description": {"type": "string", "description": "Chart description (auto-generated if not provided)"}
            },
            "required": ["data"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let data = args.get_value("data")?;
        let request = ChartRequest {
            chart_type: args.get_string_opt("chart_type")?,
            x_field: args.get_string_opt("x_field")?,
            y_field: args.get_string_opt("y_field")?,
            title: args.get_string_opt("title")?,
            description: args.get_string_opt("description")?,
        };

        match generate_chart_data(data, &request) {
            Ok(result) => {
                debug!(
                    "Generated {} chart over {} data points",
                    result.chart_type, result.total_data_points
                );
                Ok(ToolOutput::json(&serde_json::to_value(&result)?))
            }
            Err(e) => {
                warn!("Chart generation rejected input: {}", e);
                Ok(ToolOutput::error_json(e.to_string()))
            }
        }
    }
}

/// Builds a named dataset with field metadata, ready for charting.
///
/// # Parameters
///
/// - `dataset_name` (required): Name for the dataset.
/// - `dataset_description` (required): What the dataset represents.
/// - `data_points` (required): Array of objects.
pub struct CreateCustomDataset;

impl CreateCustomDataset {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CreateCustomDataset {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CreateCustomDataset {
    fn name(&self) -> &str {
        "create_custom_dataset"
    }

    fn description(&self) -> &str {
        "Create a custom dataset that can be used for charting. The result can then be \
         visualized using the generate_chart_data tool."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "dataset_name": {"type": "string", "description": "Name for the dataset"},
                "dataset_description": {"type": "string", "description": "Description of what the dataset represents"},
                "data_points": {
                    "type": "array",
                    "items": {"type": "object"},
                    "description": "List of objects containing the data points"
                }
            },
            "required": ["dataset_name", "dataset_description", "data_points"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let name = args.get_string("dataset_name")?;
        let description = args.get_string("dataset_description")?;
        let points = args.get_array("data_points")?;

        Ok(match create_custom_dataset(&name, &description, points) {
            Ok(dataset) => ToolOutput::json(&serde_json::to_value(&dataset)?),
            Err(e) => ToolOutput::error_json(e.to_string()),
        })
    }
}
