//! Tool registry and implementations for the charting agent.
//!
//! This crate provides a [`ToolRegistry`] for registering and executing the
//! tools a language model may call while answering questions about data.
//! The [`RegistryToolExecutor`] adapter exposes a registry to an LLM runtime
//! as a `brain_core::ToolExecutor`, with optional policy controls.
//!
//! # Built-in Tools
//!
//! ## Charting
//! - [`GenerateChartData`] - Infer a chart (type, axes, title) from any record set.
//! - [`CreateCustomDataset`] - Wrap records as a named dataset with field metadata.
//!
//! ## Sample data
//! - [`SampleSalesData`], [`SampleMarketShareData`], [`SamplePerformanceMetrics`],
//!   [`SampleTimeSeriesData`], [`SampleScatterData`] - Generated datasets for trying charts.
//!
//! ## Metrics (mocked fixtures for UK, DE, PT)
//! - [`NpsScore`], [`DeepDetractionRate`], [`ChurnRate`], [`ChurnReasons`].
//!
//! ## External
//! - [`Weather`] - Current conditions via WeatherAPI.com (needs `WEATHERAPI_KEY`).
//! - [`StockPrice`] - Mock quote table (AAPL only).
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_tools::default_registry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry();
//!
//!     let result = registry
//!         .execute_json("get_nps_score", r#"{"country_code": "UK"}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content);
//! }
//! ```

mod config;
mod error;
mod executor;
mod registry;
mod tool;
pub mod tools;

pub use config::{WeatherConfig, DEFAULT_WEATHER_API_URL, DEFAULT_WEATHER_TIMEOUT_SECS};
pub use error::ToolError;
pub use executor::{RegistryToolExecutor, ToolPolicy};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{
    ChurnRate, ChurnReasons, CreateCustomDataset, DeepDetractionRate, GenerateChartData, NpsScore,
    SampleMarketShareData, SamplePerformanceMetrics, SampleSalesData, SampleScatterData,
    SampleTimeSeriesData, StockPrice, Weather,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a new registry with all built-in tools registered.
///
/// The weather tool reads its configuration from the environment.
pub fn default_registry() -> ToolRegistry {
    registry_with_weather(WeatherConfig::from_env())
}

/// Create a registry with all built-in tools and an explicit weather config.
pub fn registry_with_weather(weather: WeatherConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Charting
    registry.register(GenerateChartData::new());
    registry.register(CreateCustomDataset::new());

    // Sample data
    registry.register(SampleSalesData);
    registry.register(SampleMarketShareData);
    registry.register(SamplePerformanceMetrics);
    registry.register(SampleTimeSeriesData);
    registry.register(SampleScatterData);

    // Metrics
    registry.register(NpsScore::new());
    registry.register(DeepDetractionRate::new());
    registry.register(ChurnRate::new());
    registry.register(ChurnReasons::new());

    // External
    registry.register(Weather::with_config(weather));
    registry.register(StockPrice::new());

    registry
}
