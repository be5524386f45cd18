//! Walk through the registry: sample data, chart inference, metric lookups.
//!
//! Run with: cargo run -p agent-tools --example test_tools

use serde_json::{json, Value};
use agent_tools::{default_registry, ToolRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agent_tools=debug".parse()?)
                .add_directive("chart_engine=debug".parse()?),
        )
        .init();

    println!("=== Agent Tools Walkthrough ===\n");

    let registry = default_registry();

    println!("Registered tools:");
    for (name, desc) in registry.get_descriptions() {
        println!("  - {}: {}", name, desc);
    }
    println!();

    test_sample_to_chart(&registry).await?;
    test_metrics(&registry).await?;
    test_weather(&registry).await?;

    println!("\n=== All checks completed ===");
    Ok(())
}

/// Each sample generator's data should chart as its first suggested type.
async fn test_sample_to_chart(registry: &ToolRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Sample data -> chart ---");

    let samples = [
        ("get_sample_sales_data", json!({"period_months": 12})),
        ("get_sample_market_share_data", json!({})),
        ("get_sample_performance_metrics", json!({})),
        ("get_sample_time_series_data", json!({"metric_name": "Signups", "days": 14})),
        ("get_sample_scatter_data", json!({"records": 25})),
    ];

    for (tool, args) in samples {
        let sample = registry.execute_json(tool, &args.to_string()).await?;
        let sample: Value = serde_json::from_str(&sample.content)?;

        let chart = registry
            .execute_json(
                "generate_chart_data",
                &json!({ "data": sample["data"] }).to_string(),
            )
            .await?;
        let chart: Value = serde_json::from_str(&chart.content)?;

        println!(
            "  {} -> {} ({}), suggested {}",
            tool, chart["chart_type"], chart["title"], sample["suggested_charts"]
        );
    }

    println!();
    Ok(())
}

async fn test_metrics(registry: &ToolRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Metrics ---");

    for tool in ["get_nps_score", "get_churn_rate", "get_deep_detraction_rate"] {
        for code in ["uk", "DE", "FR"] {
            let args = json!({ "country_code": code }).to_string();
            let result = registry.execute_json(tool, &args).await?;
            let status = if result.success { "OK" } else { "ERR" };
            println!("  [{}] {} {}", status, tool, code);
        }
    }

    println!();
    Ok(())
}

async fn test_weather(registry: &ToolRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Weather ---");
    println!("  (Requires network access and WEATHERAPI_KEY)");

    let result = registry
        .execute_json("get_weather", r#"{"location": "London"}"#)
        .await?;
    println!("  {}", result.content.lines().next().unwrap_or(""));

    println!();
    Ok(())
}
