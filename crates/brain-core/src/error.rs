//! Error types for the tool-calling contract.

use thiserror::Error;

/// Errors raised while wiring tools to an LLM runtime.
#[derive(Debug, Error)]
pub enum BrainError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A tool call could not be prepared or dispatched.
    #[error("tool error: {0}")]
    Tool(String),
}

impl From<serde_json::Error> for BrainError {
    fn from(err: serde_json::Error) -> Self {
        BrainError::Tool(format!("invalid tool arguments: {}", err))
    }
}
