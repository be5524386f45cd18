//! Mock NPS and deep-detraction metrics per country.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use super::{country_code_parameters, country_lookup};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

const DEEP_DETRACTION_FIXTURE: &str = include_str!("../../data/deep_detraction_rate.json");

/// Net Promoter Score lookup for UK, DE and PT.
pub struct NpsScore;

impl NpsScore {
    pub fn new() -> Self {
        Self
    }

    fn table() -> Value {
        json!({
            "UK": {"company_name": "Vodafone UK", "nps_score": 45},
            "DE": {"company_name": "Vodafone Germany", "nps_score": 42},
            "PT": {"company_name": "Vodafone Portugal", "nps_score": 48}
        })
    }
}

impl Default for NpsScore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for NpsScore {
    fn name(&self) -> &str {
        "get_nps_score"
    }

    fn description(&self) -> &str {
        "Get the Net Promoter Score (NPS) for Vodafone in a given country. \
         This is a mocked function and supports country codes 'UK', 'DE', and 'PT'."
    }

    fn parameters(&self) -> Value {
        country_code_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let code = args.get_string("country_code")?;
        Ok(country_lookup(&Self::table(), &code, "NPS score", Utc::now(), false))
    }
}

/// Deep Detraction Rate with a five-month trend, benchmark and insights.
pub struct DeepDetractionRate;

impl DeepDetractionRate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeepDetractionRate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DeepDetractionRate {
    fn name(&self) -> &str {
        "get_deep_detraction_rate"
    }

    fn description(&self) -> &str {
        "Get the Deep Detraction Rate for Vodafone in a given country, including a historical trend. \
         This is a mocked function and supports country codes 'UK', 'DE', and 'PT'."
    }

    fn parameters(&self) -> Value {
        country_code_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let code = args.get_string("country_code")?;
        let table: Value = serde_json::from_str(DEEP_DETRACTION_FIXTURE)?;
        Ok(country_lookup(
            &table,
            &code,
            "Deep Detraction Rate",
            Utc::now(),
            true,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str) -> ToolArgs {
        ToolArgs::from_value(json!({ "country_code": code })).unwrap()
    }

    #[tokio::test]
    async fn test_nps_lookup_is_case_insensitive() {
        let output = NpsScore::new().execute(country("pt")).await.unwrap();
        assert!(output.success);
        let value = output.as_json().unwrap();
        assert_eq!(value["company_name"], "Vodafone Portugal");
        assert_eq!(value["nps_score"], 48);
        assert!(value.get("timestamp").is_some());
        assert!(value.get("last_updated_formatted").is_none());
    }

    #[tokio::test]
    async fn test_nps_unknown_country() {
        let output = NpsScore::new().execute(country("ES")).await.unwrap();
        assert!(!output.success);
        assert_eq!(
            output.as_json().unwrap()["error"],
            "NPS score for Vodafone in ES not found. Supported country codes are UK, DE, PT."
        );
    }

    #[test]
    fn test_deep_detraction_fixture_parses() {
        let table: Value = serde_json::from_str(DEEP_DETRACTION_FIXTURE).unwrap();
        for code in ["UK", "DE", "PT"] {
            assert_eq!(table[code]["trend"].as_array().unwrap().len(), 5);
        }
        assert_eq!(table["PT"]["status"], "declining");
    }

    #[tokio::test]
    async fn test_deep_detraction_stamps_both_times() {
        let output = DeepDetractionRate::new().execute(country("UK")).await.unwrap();
        let value = output.as_json().unwrap();
        assert_eq!(value["deep_detraction_rate"], 10.0);
        assert_eq!(value["deep_detraction_rate_formatted"], "10%");
        assert!(value.get("timestamp").is_some());
        assert!(value.get("last_updated_formatted").is_some());
    }

    #[tokio::test]
    async fn test_missing_country_code() {
        let result = DeepDetractionRate::new().execute(ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }
}
