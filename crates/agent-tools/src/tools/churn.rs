//! Mock churn metrics per country.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use super::{country_code_parameters, country_lookup};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

const CHURN_RATE_FIXTURE: &str = include_str!("../../data/churn_rate.json");
const CHURN_REASONS_FIXTURE: &str = include_str!("../../data/churn_reasons.json");

/// Churn rate with a five-month trend, benchmark and insights.
pub struct ChurnRate;

impl ChurnRate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChurnRate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ChurnRate {
    fn name(&self) -> &str {
        "get_churn_rate"
    }

    fn description(&self) -> &str {
        "Get the Churn Rate for Vodafone in a given country, including a historical trend. \
         This is a mocked function and supports country codes 'UK', 'DE', and 'PT'."
    }

    fn parameters(&self) -> Value {
        country_code_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let code = args.get_string("country_code")?;
        let table: Value = serde_json::from_str(CHURN_RATE_FIXTURE)?;
        Ok(country_lookup(&table, &code, "Churn Rate", Utc::now(), true))
    }
}

/// Top five churn reasons with percentages, history and recommendations.
pub struct ChurnReasons;

impl ChurnReasons {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChurnReasons {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ChurnReasons {
    fn name(&self) -> &str {
        "get_churn_reasons"
    }

    fn description(&self) -> &str {
        "Get the top 5 reasons for customer churn for Vodafone in a given country with \
         percentage breakdown and historical trends. \
         This is a mocked function and supports country codes 'UK', 'DE', and 'PT'."
    }

    fn parameters(&self) -> Value {
        country_code_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let code = args.get_string("country_code")?;
        let table: Value = serde_json::from_str(CHURN_REASONS_FIXTURE)?;
        Ok(country_lookup(&table, &code, "Churn reasons", Utc::now(), true))
    }
}
