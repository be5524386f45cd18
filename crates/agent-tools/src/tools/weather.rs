//! Weather tool using WeatherAPI.com current conditions.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::WeatherConfig;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Weather tool that fetches current conditions from WeatherAPI.com.
///
/// Failures never surface as errors: the tool answers with an apology that
/// names the location and the cause, so the model can relay it directly.
///
/// # Parameters
///
/// - `location` (required): City name, e.g. "London", "New York", "Tokyo".
pub struct Weather {
    client: reqwest::Client,
    config: WeatherConfig,
}

/// Subset of the WeatherAPI `current.json` response we report on.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub location: ReportLocation,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: Condition,
    pub humidity: Value,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub uv: Value,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQuality {
    #[serde(rename = "us-epa-index", default)]
    pub us_epa_index: Option<Value>,
}

impl WeatherReport {
    /// Render the multi-line report sent back to the model.
    pub fn format(&self) -> String {
        let air_quality = self
            .current
            .air_quality
            .as_ref()
            .and_then(|aq| aq.us_epa_index.as_ref())
            .map(|index| match index {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            "Current weather in {}, {}, {} (Local time: {}):\n\
             • Temperature: {}°C (feels like {}°C)\n\
             • Conditions: {}\n\
             • Humidity: {}%\n\
             • Wind: {} km/h from {}\n\
             • UV Index: {}\n\
             • Air Quality Index (US EPA): {}",
            self.location.name,
            self.location.region,
            self.location.country,
            self.location.localtime,
            self.current.temp_c.round() as i64,
            self.current.feelslike_c.round() as i64,
            self.current.condition.text,
            self.current.humidity,
            self.current.wind_kph.round() as i64,
            self.current.wind_dir,
            self.current.uv,
            air_quality,
        )
    }
}

impl Weather {
    /// Create a weather tool configured from the environment.
    pub fn new() -> Self {
        Self::with_config(WeatherConfig::from_env())
    }

    /// Create a weather tool with explicit configuration.
    pub fn with_config(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// Fetch current conditions for a location. Single attempt, no retry.
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReport, ToolError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            ToolError::Configuration("WEATHERAPI_KEY environment variable is not set".to_string())
        })?;

        let url = Url::parse_with_params(
            &self.config.api_url,
            &[("key", api_key), ("q", location), ("aqi", "yes")],
        )
        .map_err(|e| ToolError::Configuration(format!("invalid WEATHERAPI_URL: {}", e)))?;

        debug!("Fetching weather for '{}' from {}", location, self.config.api_url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::ExecutionFailed(format!(
                "Failed to fetch weather data: {}",
                body
            )));
        }

        Ok(response.json::<WeatherReport>().await?)
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for Weather {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather for a specific location, including temperature, \
         conditions, humidity, wind, UV index and air quality."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The city name to get weather for (e.g., \"London\", \"New York\", \"Tokyo\")"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let location = args.get_string("location")?;

        match self.fetch_weather(&location).await {
            Ok(report) => Ok(ToolOutput::success(report.format())),
            Err(e) => {
                warn!("Weather fetch failed: {}", e);
                Ok(ToolOutput::success(format!(
                    "Sorry, I couldn't fetch the weather data for {}. Error: {}",
                    location, e
                )))
            }
        }
    }
}
