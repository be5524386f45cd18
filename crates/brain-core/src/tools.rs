//! Tool calls and their results.
//!
//! The model emits a tool call (id, name, JSON-encoded arguments); the
//! runtime turns it into a [`ToolRequest`], hands it to a [`ToolExecutor`],
//! and feeds the [`ToolResult`] content back to the model as the tool turn.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BrainError;

/// Optional metadata about the tool call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolRequestMeta {
    /// Conversation the call belongs to, if the runtime tracks one.
    pub conversation_id: Option<String>,
    /// End-user identifier, if available.
    pub user_id: Option<String>,
}

/// Result of a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The result content (will be sent back to the model).
    pub content: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed tool result.
    pub fn error(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: format!("Error: {}", error.into()),
            success: false,
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object, in the order the model sent them.
    pub arguments: Map<String, Value>,
    /// Optional metadata about the tool call.
    pub metadata: Option<ToolRequestMeta>,
}

impl ToolRequest {
    /// Create a request from already-decoded arguments.
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
            metadata: None,
        }
    }

    /// Parse arguments from the JSON string the model produced.
    ///
    /// An empty string is accepted as "no arguments".
    pub fn from_call(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments_json: &str,
    ) -> Result<Self, BrainError> {
        let arguments = if arguments_json.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(arguments_json)? {
                Value::Object(map) => map,
                other => {
                    return Err(BrainError::Tool(format!(
                        "tool arguments must be a JSON object, got {}",
                        other
                    )))
                }
            }
        };
        Ok(Self::new(id, name, arguments))
    }

    /// Attach metadata to an existing tool request.
    pub fn with_metadata(mut self, metadata: ToolRequestMeta) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Get a string argument by name.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument, or return an error message.
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

/// Trait for executing tools called by the model.
///
/// The runtime calls [`execute`](ToolExecutor::execute) once per tool call
/// and never sees a Rust error: failures come back as
/// [`ToolResult::error`] so the model can read them and re-plan.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> ToolResult;

    /// List the tools this executor supports.
    fn supported_tools(&self) -> Vec<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("call-123", "Some data");
        assert!(result.success);
        assert_eq!(result.tool_call_id, "call-123");
        assert_eq!(result.content, "Some data");
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("call-456", "Something went wrong");
        assert!(!result.success);
        assert_eq!(result.content, "Error: Something went wrong");
    }

    #[test]
    fn test_tool_request_parsing() {
        let request = ToolRequest::from_call(
            "id-1",
            "get_churn_rate",
            r#"{"country_code": "UK", "extra": 3}"#,
        )
        .unwrap();

        assert_eq!(request.name, "get_churn_rate");
        assert_eq!(request.get_string("country_code"), Some("UK"));
        assert_eq!(request.get_string("extra"), None);
        assert!(request.metadata.is_none());
    }

    #[test]
    fn test_tool_request_empty_arguments() {
        let request = ToolRequest::from_call("id-1", "get_sample_market_share_data", "").unwrap();
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_tool_request_rejects_non_object() {
        let err = ToolRequest::from_call("id-1", "x", "[1, 2]").unwrap_err();
        assert!(matches!(err, BrainError::Tool(_)));

        let err = ToolRequest::from_call("id-1", "x", "{not json").unwrap_err();
        assert!(matches!(err, BrainError::Tool(_)));
    }

    #[test]
    fn test_require_string_missing() {
        let request = ToolRequest::from_call("id-1", "test", r#"{"foo": "bar"}"#).unwrap();
        assert_eq!(
            request.require_string("missing").unwrap_err(),
            "Missing required argument: missing"
        );
    }

    struct UpperExecutor;

    #[async_trait]
    impl ToolExecutor for UpperExecutor {
        async fn execute(&self, request: ToolRequest) -> ToolResult {
            match request.require_string("text") {
                Ok(text) => ToolResult::success(&request.id, text.to_uppercase()),
                Err(e) => ToolResult::error(&request.id, e),
            }
        }

        fn supported_tools(&self) -> Vec<&str> {
            vec!["upper"]
        }
    }

    #[tokio::test]
    async fn test_executor_round_trip() {
        let executor = UpperExecutor;
        let ok = executor
            .execute(ToolRequest::from_call("a", "upper", r#"{"text": "line"}"#).unwrap())
            .await;
        assert_eq!(ok, ToolResult::success("a", "LINE"));

        let err = executor
            .execute(ToolRequest::from_call("b", "upper", "{}").unwrap())
            .await;
        assert_eq!(err.content, "Error: Missing required argument: text");
        assert_eq!(executor.supported_tools(), vec!["upper"]);
    }

    #[test]
    fn test_with_metadata() {
        let meta = ToolRequestMeta {
            conversation_id: Some("conv-1".to_string()),
            user_id: None,
        };
        let request = ToolRequest::new("id", "x", Map::new()).with_metadata(meta.clone());
        assert_eq!(request.metadata, Some(meta));
    }
}
