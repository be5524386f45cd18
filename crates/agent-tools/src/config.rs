//! Environment configuration for networked tools.

use std::env;
use std::time::Duration;

/// Default WeatherAPI current-conditions endpoint.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Default request timeout for weather lookups, in seconds.
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;

/// Configuration for the `get_weather` tool.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// WeatherAPI key. Without it every lookup fails with an apology.
    pub api_key: Option<String>,

    /// Current-conditions endpoint.
    pub api_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_WEATHER_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_WEATHER_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `WEATHERAPI_KEY` - API key (lookups fail without it)
    /// - `WEATHERAPI_URL` - Endpoint (default: https://api.weatherapi.com/v1/current.json)
    /// - `WEATHERAPI_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("WEATHERAPI_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("WEATHERAPI_URL").unwrap_or(defaults.api_url);

        let timeout = env::var("WEATHERAPI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_key,
            api_url,
            timeout,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the endpoint URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
