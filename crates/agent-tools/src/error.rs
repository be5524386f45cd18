//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// Only argument decoding and dispatch problems surface here; domain
/// failures (unknown country code, empty dataset) are returned as
/// `{"error": ...}` payloads in a failed [`ToolOutput`](crate::ToolOutput).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed. The request URL is stripped, since query
    /// strings can carry API keys.
    #[error("HTTP error: {0}")]
    HttpError(reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Missing or invalid configuration (e.g. an API key).
    #[error("{0}")]
    Configuration(String),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Shorthand for [`ToolError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(e: reqwest::Error) -> Self {
        ToolError::HttpError(e.without_url())
    }
}
