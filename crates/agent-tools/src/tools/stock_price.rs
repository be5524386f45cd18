//! Mock stock price lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::debug;

use super::stamp;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Stock quote lookup backed by a fixed table.
///
/// Only `AAPL` is present; symbols match exactly (no case folding).
///
/// # Parameters
///
/// - `stock_symbol` (required): Ticker symbol, e.g. "AAPL".
pub struct StockPrice;

impl StockPrice {
    pub fn new() -> Self {
        Self
    }

    /// Quote for `symbol` stamped with `now`, or the error message.
    pub fn quote(symbol: &str, now: DateTime<Utc>) -> Result<Value, String> {
        let table = json!({
            "AAPL": {
                "symbol": "AAPL",
                "company_name": "Apple Inc.",
                "current_price": 173.50,
                "change": 2.35,
                "change_percent": 1.37,
                "volume": 52436789,
                "market_cap": "2.73T",
                "pe_ratio": 28.5,
                "fifty_two_week_high": 198.23,
                "fifty_two_week_low": 124.17
            }
        });

        let mut record = table.get(symbol).cloned().ok_or_else(|| {
            format!(
                "Stock price for {} not found. Only 'AAPL' is supported in this mock.",
                symbol
            )
        })?;
        stamp(&mut record, now, false);
        Ok(record)
    }
}

impl Default for StockPrice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for StockPrice {
    fn name(&self) -> &str {
        "get_stock_price"
    }

    fn description(&self) -> &str {
        "Get the current stock price and related information for a given stock symbol. \
         This is a mocked function and only supports 'AAPL'."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "stock_symbol": {
                    "type": "string",
                    "description": "The stock symbol to get price for (e.g., \"AAPL\")"
                }
            },
            "required": ["stock_symbol"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let symbol = args.get_string("stock_symbol")?;
        debug!("Looking up stock price for '{}'", symbol);

        Ok(match Self::quote(&symbol, Utc::now()) {
            Ok(quote) => ToolOutput::json(&quote),
            Err(message) => ToolOutput::error_json(message),
        })
    }
}
