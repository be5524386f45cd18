//! Chart type selection, renderer options, and title/description text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use crate::analysis::{DataPattern, DatasetProfile};
use crate::value::RawRecord;

/// Visualization family.
///
/// Caller-supplied chart types are accepted verbatim; anything outside the
/// known families is carried as [`ChartType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    MultiBar,
    MultiLine,
    Other(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::MultiBar => "multi-bar",
            ChartType::MultiLine => "multi-line",
            ChartType::Other(name) => name,
        }
    }

    /// Pick a chart type from the detected structure.
    ///
    /// Rules are a priority list; only the first match applies.
    pub fn infer(profile: &DatasetProfile) -> Self {
        if profile.has_pattern(DataPattern::TimeSeries) {
            ChartType::Line
        } else if profile.has_pattern(DataPattern::CategoricalBreakdown) {
            if profile.has_percentages {
                ChartType::Pie
            } else {
                ChartType::Bar
            }
        } else if profile.has_pattern(DataPattern::MultiMetric) {
            ChartType::MultiBar
        } else if profile.has_categories {
            ChartType::Bar
        } else {
            ChartType::Line
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ChartType {
    fn from(value: &str) -> Self {
        match value {
            "line" => ChartType::Line,
            "bar" => ChartType::Bar,
            "pie" => ChartType::Pie,
            "scatter" => ChartType::Scatter,
            "multi-bar" => ChartType::MultiBar,
            "multi-line" => ChartType::MultiLine,
            other => ChartType::Other(other.to_string()),
        }
    }
}

impl FromStr for ChartType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChartType::from(s))
    }
}

impl Serialize for ChartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ChartType::from(name.as_str()))
    }
}

/// Renderer-ready chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// The input records, echoed back unchanged.
    pub data: Vec<RawRecord>,
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    /// Type-specific renderer options.
    pub options: Value,
}

impl ChartConfig {
    pub fn new(
        chart_type: ChartType,
        data: Vec<RawRecord>,
        x_field: Option<String>,
        y_field: Option<String>,
    ) -> Self {
        let options = chart_options(&chart_type, x_field.as_deref(), y_field.as_deref());
        Self {
            chart_type,
            data,
            x_field,
            y_field,
            options,
        }
    }
}

/// Renderer options for a chart type. Types without a fixed layout get `{}`.
pub fn chart_options(chart_type: &ChartType, x_field: Option<&str>, y_field: Option<&str>) -> Value {
    match chart_type {
        ChartType::Line => json!({
            "responsive": true,
            "interaction": {"intersect": false},
            "scales": {
                "x": {"display": true, "title": {"display": true, "text": x_field.unwrap_or("X-Axis")}},
                "y": {"display": true, "title": {"display": true, "text": y_field.unwrap_or("Y-Axis")}}
            }
        }),
        ChartType::Bar => json!({
            "responsive": true,
            "plugins": {"legend": {"position": "top"}},
            "scales": {
                "x": {"title": {"display": true, "text": x_field.unwrap_or("Categories")}},
                "y": {"title": {"display": true, "text": y_field.unwrap_or("Values")}}
            }
        }),
        ChartType::Pie => json!({
            "responsive": true,
            "plugins": {
                "legend": {"position": "right"},
                "tooltip": {
                    "callbacks": {
                        "label": "function(context) { return context.label + ': ' + context.parsed + '%'; }"
                    }
                }
            }
        }),
        _ => json!({}),
    }
}

/// Title-case words the way `str.title()` does: a letter is upper-cased when
/// it follows a non-letter, lower-cased otherwise.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Display label for a field name: underscores become spaces, then title case.
pub fn field_label(field: &str) -> String {
    title_case(&field.replace('_', " "))
}

/// Generate a title from the resolved config and detected patterns.
///
/// A missing axis field renders with the same placeholder the bar options use.
pub fn generate_title(config: &ChartConfig, profile: &DatasetProfile) -> String {
    let y_label = field_label(config.y_field.as_deref().unwrap_or("Values"));
    let x_label = field_label(config.x_field.as_deref().unwrap_or("Categories"));

    match config.chart_type {
        ChartType::Line if profile.has_pattern(DataPattern::TimeSeries) => {
            format!("{} Over Time", y_label)
        }
        ChartType::Bar => format!("{} by {}", y_label, x_label),
        ChartType::Pie => format!("{} Distribution", y_label),
        ref other => format!("{} Chart", title_case(other.as_str())),
    }
}

/// Generate a description from the record count and detected patterns.
pub fn generate_description(profile: &DatasetProfile) -> String {
    let mut description = format!("Chart showing {} data points", profile.total_records);
    for pattern in &profile.data_patterns {
        let clause = match pattern {
            DataPattern::TimeSeries => "with time series analysis",
            DataPattern::CategoricalBreakdown => "with categorical breakdown",
            DataPattern::MultiMetric => "with multiple metrics",
        };
        description.push_str(", ");
        description.push_str(clause);
    }
    description.push('.');
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::value::{record_from_object, Dataset};

    fn profile_for(value: Value) -> DatasetProfile {
        let dataset: Dataset = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| record_from_object(v.as_object().unwrap()))
            .collect();
        analyze(&dataset)
    }

    #[test]
    fn test_chart_type_round_trip_names() {
        for name in ["line", "bar", "pie", "scatter", "multi-bar", "multi-line"] {
            assert_eq!(ChartType::from(name).as_str(), name);
        }
        assert_eq!(
            ChartType::from("radar"),
            ChartType::Other("radar".to_string())
        );
        assert_eq!(serde_json::to_value(ChartType::MultiBar).unwrap(), "multi-bar");
    }

    #[test]
    fn test_infer_priority() {
        let time_series = profile_for(json!([
            {"date": "2024-01", "region": "EU", "share": "10%"},
            {"date": "2024-02", "region": "EU", "share": "20%"},
            {"date": "2024-03", "region": "EU", "share": "30%"},
        ]));
        assert_eq!(ChartType::infer(&time_series), ChartType::Line);

        let breakdown = profile_for(json!([
            {"region": "EU", "share": "10%"},
            {"region": "EU", "share": "20%"},
            {"region": "EU", "share": "30%"},
        ]));
        assert_eq!(ChartType::infer(&breakdown), ChartType::Pie);

        let multi = profile_for(json!([
            {"a": 1, "b": 2, "c": 3},
            {"a": 4, "b": 5, "c": 6},
        ]));
        assert_eq!(ChartType::infer(&multi), ChartType::MultiBar);

        let categories = profile_for(json!([
            {"region": "EU", "sales": 1},
            {"region": "EU", "sales": 2},
            {"region": "EU", "sales": 3},
        ]));
        assert_eq!(ChartType::infer(&categories), ChartType::Bar);

        let plain = profile_for(json!([
            {"month": "Jan", "sales": 1000},
            {"month": "Feb", "sales": 1200},
        ]));
        assert_eq!(ChartType::infer(&plain), ChartType::Line);
    }

    #[test]
    fn test_options_per_type() {
        let line = chart_options(&ChartType::Line, Some("date"), None);
        assert_eq!(line["responsive"], true);
        assert_eq!(line["scales"]["x"]["title"]["text"], "date");
        assert_eq!(line["scales"]["y"]["title"]["text"], "Y-Axis");

        let bar = chart_options(&ChartType::Bar, None, Some("sales"));
        assert_eq!(bar["plugins"]["legend"]["position"], "top");
        assert_eq!(bar["scales"]["x"]["title"]["text"], "Categories");
        assert_eq!(bar["scales"]["y"]["title"]["text"], "sales");

        let pie = chart_options(&ChartType::Pie, None, None);
        assert_eq!(pie["plugins"]["legend"]["position"], "right");
        assert!(pie["plugins"]["tooltip"]["callbacks"]["label"]
            .as_str()
            .unwrap()
            .contains('%'));

        assert_eq!(chart_options(&ChartType::Scatter, Some("x"), Some("y")), json!({}));
        assert_eq!(
            chart_options(&ChartType::Other("radar".into()), None, None),
            json!({})
        );
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("monthly_sales"), "Monthly Sales");
        assert_eq!(field_label("NPS_score"), "Nps Score");
        assert_eq!(field_label("q1revenue"), "Q1Revenue");
    }

    #[test]
    fn test_titles() {
        let profile = profile_for(json!([
            {"date": "2024-01", "churn_rate": 3.5},
            {"date": "2024-02", "churn_rate": 3.2},
        ]));
        let config = ChartConfig::new(
            ChartType::Line,
            vec![],
            Some("date".into()),
            Some("churn_rate".into()),
        );
        assert_eq!(generate_title(&config, &profile), "Churn Rate Over Time");

        let config = ChartConfig::new(
            ChartType::Bar,
            vec![],
            Some("region".into()),
            Some("total_sales".into()),
        );
        assert_eq!(generate_title(&config, &profile), "Total Sales by Region");

        let config = ChartConfig::new(ChartType::Pie, vec![], None, Some("share".into()));
        assert_eq!(generate_title(&config, &profile), "Share Distribution");

        let config = ChartConfig::new(ChartType::MultiBar, vec![], None, None);
        assert_eq!(generate_title(&config, &profile), "Multi-Bar Chart");
    }

    #[test]
    fn test_line_without_time_series_uses_type_title() {
        let profile = profile_for(json!([{"month": "Jan", "sales": 1}, {"month": "Feb", "sales": 2}]));
        let config = ChartConfig::new(ChartType::Line, vec![], None, Some("sales".into()));
        assert_eq!(generate_title(&config, &profile), "Line Chart");
    }

    #[test]
    fn test_descriptions() {
        let plain = profile_for(json!([{"month": "Jan", "sales": 1}, {"month": "Feb", "sales": 2}]));
        assert_eq!(generate_description(&plain), "Chart showing 2 data points.");

        let rich = profile_for(json!([
            {"d": "2024-01-01", "a": 1, "b": 2, "c": 3},
            {"d": "2024-01-02", "a": 4, "b": 5, "c": 6},
            {"d": "2024-01-03", "a": 7, "b": 8, "c": 9},
        ]));
        assert_eq!(
            generate_description(&rich),
            "Chart showing 3 data points, with time series analysis, with multiple metrics."
        );
    }

    #[test]
    fn test_pie_description_has_breakdown_clause() {
        let profile = profile_for(json!([
            {"carrier": "Vodafone", "share": "40%"},
            {"carrier": "Vodafone", "share": "25%"},
            {"carrier": "Other", "share": "20%"},
            {"carrier": "Other", "share": "10%"},
            {"carrier": "Vodafone", "share": "5%"},
        ]));
        assert_eq!(ChartType::infer(&profile), ChartType::Pie);
        assert_eq!(
            generate_description(&profile),
            "Chart showing 5 data points, with categorical breakdown."
        );
    }

    #[test]
    fn test_description_clause_order() {
        let profile = profile_for(json!([
            {"day": "2024-01-01", "region": "EU", "share": "10%", "a": 1, "b": 2},
            {"day": "2024-01-02", "region": "EU", "share": "20%", "a": 3, "b": 4},
            {"day": "2024-01-03", "region": "EU", "share": "30%", "a": 5, "b": 6},
            {"day": "2024-01-04", "region": "US", "share": "15%", "a": 7, "b": 8},
            {"day": "2024-01-05", "region": "US", "share": "25%", "a": 9, "b": 10},
            {"day": "2024-01-06", "region": "US", "share": "35%", "a": 11, "b": 12},
        ]));
        assert_eq!(
            generate_description(&profile),
            "Chart showing 6 data points, with time series analysis, \
             with categorical breakdown, with multiple metrics."
        );
    }
}
