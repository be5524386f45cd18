//! Tool-calling contract between an LLM runtime and the tools it may call.
//!
//! This crate defines:
//!
//! - [`ToolExecutor`] - The trait a runtime uses to dispatch tool calls
//! - [`ToolRequest`] / [`ToolResult`] - A single call and its outcome
//! - [`ToolDefinition`] - The function schema advertised to the model
//! - [`BrainError`] - Error types for wiring tools to a runtime
//! - [`build_system_prompt`] / [`hash_prompt`] - Prompt helpers
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, ToolExecutor, ToolRequest, ToolResult};
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl ToolExecutor for Echo {
//!     async fn execute(&self, request: ToolRequest) -> ToolResult {
//!         match request.require_string("text") {
//!             Ok(text) => ToolResult::success(&request.id, text),
//!             Err(e) => ToolResult::error(&request.id, e),
//!         }
//!     }
//!
//!     fn supported_tools(&self) -> Vec<&str> {
//!         vec!["echo"]
//!     }
//! }
//! ```

mod definition;
mod error;
mod prompt;
mod tools;

pub use definition::{FunctionDefinition, ToolDefinition};
pub use error::BrainError;
pub use prompt::{build_system_prompt, hash_prompt, SYSTEM_PROMPT_PREAMBLE};
pub use tools::{ToolExecutor, ToolRequest, ToolRequestMeta, ToolResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
