//! Tool registry for managing and executing tools.

use std::collections::HashMap;
use std::sync::Arc;

use brain_core::{build_system_prompt, ToolDefinition};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Registry for managing tools.
///
/// The registry holds a collection of tools and can dispatch execution
/// requests to the appropriate tool by name.
pub struct ToolRegistry {
    /// Registered tools by name.
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_boxed(Arc::new(tool));
    }

    /// Register a shared tool.
    pub fn register_boxed(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);
    }

    /// Registered tool names, sorted.
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// `(name, description)` pairs, sorted by name.
    pub fn get_descriptions(&self) -> Vec<(&str, &str)> {
        self.sorted_tools()
            .map(|t| (t.name(), t.description()))
            .collect()
    }

    /// Function definitions for every tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.sorted_tools()
            .map(|t| ToolDefinition::function(t.name(), t.description(), t.parameters()))
            .collect()
    }

    /// System prompt advertising every registered tool.
    pub fn system_prompt(&self) -> String {
        build_system_prompt(&self.definitions())
    }

    fn sorted_tools(&self) -> impl Iterator<Item = &Arc<dyn Tool>> + '_ {
        self.list_tools()
            .into_iter()
            .filter_map(move |name| self.tools.get(name))
    }

    /// Execute a tool by name with the given parameters.
    pub async fn execute(
        &self,
        name: &str,
        params: Map<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!("Executing tool '{}' with {} params", name, params.len());

        let result = tool.execute(ToolArgs::new(params)).await?;

        debug!(
            "Tool '{}' completed: success={}, content_len={}",
            name,
            result.success,
            result.content.len()
        );

        Ok(result)
    }

    /// Execute a tool with JSON arguments string.
    ///
    /// An empty string means no arguments.
    pub async fn execute_json(
        &self,
        name: &str,
        args_json: &str,
    ) -> Result<ToolOutput, ToolError> {
        let args = if args_json.trim().is_empty() {
            ToolArgs::default()
        } else {
            ToolArgs::from_value(serde_json::from_str(args_json)?)?
        };
        self.execute(name, args.params).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
