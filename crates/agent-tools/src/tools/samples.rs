//! Sample dataset generators for exercising the chart tools.
//!
//! Every generator returns the same envelope: `dataset_name`,
//! `description`, `data`, `metadata` (with `total_records` and
//! `data_types`), `suggested_charts` and `timestamp`.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `12345` -> `"12,345"`.
fn with_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Monthly sales with growth, seasonality and noise.
pub fn sales_data<R: Rng + ?Sized>(rng: &mut R, period_months: i64, now: DateTime<Utc>) -> Value {
    const BASE_SALES: f64 = 10_000.0;
    let base_date = now - Duration::days(30 * period_months);

    let data: Vec<Value> = (0..period_months)
        .map(|i| {
            let date = base_date + Duration::days(30 * i);
            let seasonal = 1.0 + 0.2 * (i as f64 * 0.5).sin();
            let growth = 1.0 + i as f64 * 0.05;
            let noise = 1.0 + rng.gen_range(-0.15_f64..=0.15);
            let sales = (BASE_SALES * seasonal * growth * noise) as i64;
            json!({
                "month": date.format("%Y-%m").to_string(),
                "month_name": date.format("%B %Y").to_string(),
                "sales": sales,
                "sales_formatted": format!("${}", with_thousands(sales)),
            })
        })
        .collect();

    let date_range = format!(
        "{} to {}",
        data.first().map_or("", |d| d["month"].as_str().unwrap_or("")),
        data.last().map_or("", |d| d["month"].as_str().unwrap_or(""))
    );

    json!({
        "dataset_name": "Sample Sales Data",
        "description": format!(
            "Monthly sales data over {} months showing growth trend with seasonal variation",
            period_months
        ),
        "metadata": {
            "total_records": data.len(),
            "date_range": date_range,
            "data_types": {
                "month": "date",
                "month_name": "text",
                "sales": "numeric",
                "sales_formatted": "text"
            }
        },
        "data": data,
        "suggested_charts": ["line", "bar"],
        "timestamp": chart_engine::format_timestamp(now),
    })
}

/// Fixed market share table.
pub fn market_share_data(now: DateTime<Utc>) -> Value {
    let companies = [
        ("Company A", 35.2),
        ("Company B", 28.7),
        ("Company C", 18.4),
        ("Company D", 12.1),
        ("Others", 5.6),
    ];
    let total_share: f64 = companies.iter().map(|(_, share)| share).sum();
    let data: Vec<Value> = companies
        .iter()
        .map(|(name, share)| json!({"name": name, "share": share}))
        .collect();

    json!({
        "dataset_name": "Sample Market Share Data",
        "description": "Market share distribution among top companies in the industry",
        "metadata": {
            "total_records": data.len(),
            "total_share": round1(total_share),
            "data_types": {"name": "categorical", "share": "numeric"}
        },
        "data": data,
        "suggested_charts": ["pie", "bar"],
        "timestamp": chart_engine::format_timestamp(now),
    })
}

/// Random per-department efficiency, satisfaction and productivity scores.
pub fn performance_metrics<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Value {
    let departments = ["Sales", "Marketing", "Engineering", "Support", "HR"];
    let data: Vec<Value> = departments
        .iter()
        .map(|department| {
            let efficiency: f64 = rng.gen_range(75.0..=95.0);
            let satisfaction: f64 = rng.gen_range(80.0..=98.0);
            let productivity: f64 = rng.gen_range(70.0..=90.0);
            json!({
                "department": department,
                "efficiency": round1(efficiency),
                "satisfaction": round1(satisfaction),
                "productivity": round1(productivity),
                "efficiency_formatted": format!("{:.1}%", efficiency),
                "satisfaction_formatted": format!("{:.1}%", satisfaction),
                "productivity_formatted": format!("{:.1}%", productivity),
            })
        })
        .collect();

    json!({
        "dataset_name": "Sample Performance Metrics",
        "description": "Department performance metrics including efficiency, satisfaction, and productivity scores",
        "metadata": {
            "total_records": data.len(),
            "metrics": ["efficiency", "satisfaction", "productivity"],
            "data_types": {
                "department": "categorical",
                "efficiency": "numeric",
                "satisfaction": "numeric",
                "productivity": "numeric"
            }
        },
        "data": data,
        "suggested_charts": ["multi-bar", "scatter", "bar"],
        "timestamp": chart_engine::format_timestamp(now),
    })
}

/// Daily values for `metric_name` with a random trend, seasonality and noise.
pub fn time_series_data<R: Rng + ?Sized>(
    rng: &mut R,
    metric_name: &str,
    days: i64,
    now: DateTime<Utc>,
) -> Value {
    const BASE_VALUE: f64 = 1000.0;
    let base_date = now - Duration::days(days);
    let trend: f64 = rng.gen_range(-0.5..=1.5);

    let data: Vec<Value> = (0..days)
        .map(|i| {
            let date = base_date + Duration::days(i);
            let trend_value = BASE_VALUE + i as f64 * trend;
            let seasonal = 1.0 + 0.1 * (i as f64 * 0.2).sin();
            let noise: f64 = rng.gen_range(-50.0..=50.0);
            let value = ((trend_value * seasonal + noise) as i64).max(0);
            json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "date_formatted": date.format("%m/%d").to_string(),
                "value": value,
                "metric_name": metric_name,
            })
        })
        .collect();

    let date_range = format!(
        "{} to {}",
        data.first().map_or("", |d| d["date"].as_str().unwrap_or("")),
        data.last().map_or("", |d| d["date"].as_str().unwrap_or(""))
    );

    json!({
        "dataset_name": format!("Sample {} Time Series", metric_name),
        "description": format!(
            "Daily {} data over {} days showing trend and variation",
            metric_name.to_lowercase(),
            days
        ),
        "metadata": {
            "total_records": data.len(),
            "date_range": date_range,
            "metric": metric_name,
            "data_types": {
                "date": "date",
                "date_formatted": "text",
                "value": "numeric",
                "metric_name": "text"
            }
        },
        "data": data,
        "suggested_charts": ["line"],
        "timestamp": chart_engine::format_timestamp(now),
    })
}

/// Positively correlated `(x, y)` points.
pub fn scatter_data<R: Rng + ?Sized>(rng: &mut R, records: i64, now: DateTime<Utc>) -> Value {
    let data: Vec<Value> = (0..records)
        .map(|i| {
            let x: f64 = rng.gen_range(10.0..=100.0);
            let y = 2.0 * x + rng.gen_range(-20.0_f64..=20.0) + rng.gen_range(0.0_f64..=30.0);
            json!({
                "x_value": round1(x),
                "y_value": round1(y),
                "point_id": format!("Point_{}", i + 1),
            })
        })
        .collect();

    json!({
        "dataset_name": "Sample Scatter Data",
        "description": format!(
            "Sample scatter plot data with {} points showing correlation between X and Y variables",
            records
        ),
        "metadata": {
            "total_records": data.len(),
            "correlation": "positive_moderate",
            "data_types": {"x_value": "numeric", "y_value": "numeric", "point_id": "text"}
        },
        "data": data,
        "suggested_charts": ["scatter"],
        "timestamp": chart_engine::format_timestamp(now),
    })
}

/// `get_sample_sales_data`.
pub struct SampleSalesData;

#[async_trait]
impl Tool for SampleSalesData {
    fn name(&self) -> &str {
        "get_sample_sales_data"
    }

    fn description(&self) -> &str {
        "Generate sample monthly sales data for chart testing."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "period_months": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 60,
                    "default": 6,
                    "description": "Number of months of data to generate"
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let months = args.get_integer_in("period_months", 1..=60, 6)?;
        debug!("Generating {} months of sample sales data", months);
        let value = sales_data(&mut rand::thread_rng(), months, Utc::now());
        Ok(ToolOutput::json(&value))
    }
}

/// `get_sample_market_share_data`.
pub struct SampleMarketShareData;

#[async_trait]
impl Tool for SampleMarketShareData {
    fn name(&self) -> &str {
        "get_sample_market_share_data"
    }

    fn description(&self) -> &str {
        "Generate sample market share data for pie chart testing."
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::json(&market_share_data(Utc::now())))
    }
}

/// `get_sample_performance_metrics`.
pub struct SamplePerformanceMetrics;

#[async_trait]
impl Tool for SamplePerformanceMetrics {
    fn name(&self) -> &str {
        "get_sample_performance_metrics"
    }

    fn description(&self) -> &str {
        "Generate sample department performance metrics for multi-metric analysis."
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let value = performance_metrics(&mut rand::thread_rng(), Utc::now());
        Ok(ToolOutput::json(&value))
    }
}

/// `get_sample_time_series_data`.
pub struct SampleTimeSeriesData;

#[async_trait]
impl Tool for SampleTimeSeriesData {
    fn name(&self) -> &str {
        "get_sample_time_series_data"
    }

    fn description(&self) -> &str {
        "Generate sample daily time series data for line chart testing."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "metric_name": {
                    "type": "string",
                    "default": "Revenue",
                    "description": "Name of the metric to generate data for"
                },
                "days": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 365,
                    "default": 30,
                    "description": "Number of days of data to generate"
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let metric_name = args
            .get_string_opt("metric_name")?
            .unwrap_or_else(|| "Revenue".to_string());
        let days = args.get_integer_in("days", 1..=365, 30)?;
        debug!("Generating {} days of sample '{}' data", days, metric_name);
        let value = time_series_data(&mut rand::thread_rng(), &metric_name, days, Utc::now());
        Ok(ToolOutput::json(&value))
    }
}

/// `get_sample_scatter_data`.
pub struct SampleScatterData;

#[async_trait]
impl Tool for SampleScatterData {
    fn name(&self) -> &str {
        "get_sample_scatter_data"
    }

    fn description(&self) -> &str {
        "Generate sample scatter plot data for correlation analysis."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "records": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 1000,
                    "default": 50,
                    "description": "Number of data points to generate"
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let records = args.get_integer_in("records", 1..=1000, 50)?;
        let value = scatter_data(&mut rand::thread_rng(), records, Utc::now());
        Ok(ToolOutput::json(&value))
    }
}
