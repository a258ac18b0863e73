//! The `Tool` seam between the registry and whatever backs a tool.

use crate::error::DispatchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool as listed by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Something the registry can advertise and invoke by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name clients call the tool by.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema object describing accepted arguments.
    fn parameters_schema(&self) -> Value;

    /// Run the tool; `args` is the JSON object sent by the client.
    async fn execute(&self, args: Value) -> Result<Value, DispatchError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.parameters_schema(),
        }
    }
}
