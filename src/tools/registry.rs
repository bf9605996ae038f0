use crate::config::ScoutConfig;
use crate::types::{AppError, Result, ToolDefinition};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A named, schema-validated capability callable by an agent runtime.
///
/// A tool declares its input and output shapes as JSON Schema so the hosting
/// runtime can validate arguments before `execute` runs and results after it
/// returns.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool id registered with the runtime.
    fn name(&self) -> &str;
    /// Human-readable description shown to the model.
    fn description(&self) -> &str;
    /// JSON Schema for the input arguments.
    fn parameters_schema(&self) -> Value;
    /// JSON Schema for the returned value.
    fn output_schema(&self) -> Value;
    /// Run the tool with validated arguments.
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Registry of available tools, keyed by tool id.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the built-in tools wired from configuration.
    pub fn with_default_tools(config: &ScoutConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(crate::tools::docs::FindLlmsTxtTool::from_config(
            config,
        )));
        registry
    }

    /// Register a tool, replacing any existing tool with the same id.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Schema definitions for every registered tool.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
                output: tool.output_schema(),
            })
            .collect()
    }

    /// Execute a registered tool by id.
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        if let Some(tool) = self.tools.get(name) {
            tool.execute(args).await
        } else {
            Err(AppError::NotFound(format!("Tool not found: {}", name)))
        }
    }

    /// Ids of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Whether a tool id is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}
