//! Tool trait definition and types.

use std::ops::RangeInclusive;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs, in the order the caller sent them.
    pub params: Map<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Build arguments from a JSON value. Anything but an object is rejected.
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        match value {
            Value::Object(params) => Ok(Self { params }),
            Value::Null => Ok(Self::default()),
            other => Err(ToolError::invalid(
                "arguments",
                format!("expected a JSON object, got {}", other),
            )),
        }
    }

    /// Get a raw parameter value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Get a required parameter of any JSON type.
    pub fn get_value(&self, key: &str) -> Result<&Value, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.get_value(key)?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::invalid(key, "expected string"))
    }

    /// Get an optional string parameter. `null` counts as absent.
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ToolError::invalid(key, "expected string")),
        }
    }

    /// Get a required array parameter.
    pub fn get_array(&self, key: &str) -> Result<&Vec<Value>, ToolError> {
        self.get_value(key)?
            .as_array()
            .ok_or_else(|| ToolError::invalid(key, "expected array"))
    }

    /// Get an optional integer parameter within `range`, or `default` when absent.
    ///
    /// Whole-valued floats such as `6.0` are accepted.
    pub fn get_integer_in(
        &self,
        key: &str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> Result<i64, ToolError> {
        let value = match self.params.get(key) {
            None | Some(Value::Null) => return Ok(default),
            Some(v) => v,
        };
        let number = value
            .as_i64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| ToolError::invalid(key, "expected integer"))?;

        if !range.contains(&number) {
            return Err(ToolError::invalid(
                key,
                format!(
                    "must be between {} and {}",
                    range.start(),
                    range.end()
                ),
            ));
        }
        Ok(number)
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content (text or JSON).
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }

    /// A successful output carrying a JSON payload.
    pub fn json(value: &Value) -> Self {
        Self::success(value.to_string())
    }

    /// A failed output carrying `{"error": message}`.
    pub fn error_json(message: impl Into<String>) -> Self {
        Self::failure(json!({ "error": message.into() }).to_string())
    }

    /// Parse the content back into JSON, if it is JSON.
    pub fn as_json(&self) -> Option<Value> {
        serde_json::from_str(&self.content).ok()
    }
}

/// Trait for tools the model can call.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
