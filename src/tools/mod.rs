pub mod catalog;
pub mod dispatcher;
pub mod traits;

pub use dispatcher::Dispatcher;
pub use traits::{Tool, ToolDefinition};

use crate::error::DispatchError;
use crate::types::{EndpointDescriptor, ToolResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Endpoint-backed tools
// ---------------------------------------------------------------------------

/// A tool that forwards to one SendGrid endpoint.
#[derive(Debug, Clone)]
pub struct EndpointTool {
    descriptor: &'static EndpointDescriptor,
    dispatcher: Dispatcher,
}

impl EndpointTool {
    pub fn new(descriptor: &'static EndpointDescriptor, dispatcher: Dispatcher) -> Self {
        Self {
            descriptor,
            dispatcher,
        }
    }

    pub fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn name(&self) -> &str {
        self.descriptor.name
    }

    fn description(&self) -> &str {
        self.descriptor.description
    }

    fn parameters_schema(&self) -> Value {
        self.descriptor.input_schema()
    }

    async fn execute(&self, args: Value) -> Result<Value, DispatchError> {
        self.dispatcher.call(self.descriptor, &args).await
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Named collection of tools served to clients.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tool per catalog endpoint, sharing a dispatcher.
    pub fn from_catalog(dispatcher: Dispatcher) -> Self {
        let mut registry = Self::new();
        for descriptor in catalog::all() {
            registry.register(Arc::new(EndpointTool::new(descriptor, dispatcher.clone())));
        }
        debug!("Registered {} SendGrid tools", registry.len());
        registry
    }

    /// Add a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of every tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Execute a tool by name, folding failures into the result.
    pub async fn execute(&self, name: &str, args: Value) -> ToolResult {
        self.execute_with_cancel(name, args, &CancellationToken::new())
            .await
    }

    /// Execute a tool by name, giving up when `cancel` fires.
    pub async fn execute_with_cancel(
        &self,
        name: &str,
        args: Value,
        cancel: &CancellationToken,
    ) -> ToolResult {
        let result = match self.get(name) {
            Some(tool) => tokio::select! {
                _ = cancel.cancelled() => Err(DispatchError::Cancelled),
                result = tool.execute(args) => result,
            },
            None => Err(DispatchError::UnknownTool(name.to_string())),
        };

        match result {
            Ok(output) => ToolResult::ok(output),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                ToolResult::error(format!("Error: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sendgrid::SendgridClient;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the arguments back."
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object"})
        }

        async fn execute(&self, args: Value) -> Result<Value, DispatchError> {
            Ok(args)
        }
    }

    fn registry_for(uri: &str) -> ToolRegistry {
        let client = SendgridClient::new(uri, "SG.key").unwrap();
        ToolRegistry::from_catalog(Dispatcher::new(client))
    }

    #[test]
    fn catalog_registry_covers_every_endpoint() {
        let registry = registry_for("https://api.sendgrid.com");
        assert_eq!(registry.len(), catalog::len());

        let definitions = registry.definitions();
        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let get_key = definitions
            .iter()
            .find(|d| d.name == "get_api_key")
            .unwrap();
        assert_eq!(get_key.input_schema["required"], json!(["api_key_id"]));
    }

    #[tokio::test]
    async fn custom_tools_can_be_registered() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(EchoTool));

        let result = registry.execute("echo", json!({"x": 1})).await;
        assert!(result.success);
        assert_eq!(result.output, json!({"x": 1}));
    }

    #[tokio::test]
    async fn failures_fold_into_result() {
        let registry = registry_for("https://api.sendgrid.com");

        let result = registry.execute("missing_tool", json!({})).await;
        assert!(!result.success);
        assert_eq!(result.text(), "Error: Unknown tool: missing_tool");

        let result = registry.execute("get_api_key", json!({})).await;
        assert!(!result.success);
        assert!(result.text().contains("api_key_id"));
    }

    #[tokio::test]
    async fn endpoint_tool_reports_http_status() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/v3/templates/tpl-1"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let result = registry
            .execute("delete_template", json!({"template_id": "tpl-1"}))
            .await;
        assert!(!result.success);
        assert!(result.text().contains("500"));
    }

    #[tokio::test]
    async fn cancelled_execution_reports_cancellation() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_secs(10)),
            )
            .mount(&server)
            .await;
        let registry = registry_for(&server.uri());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = registry
            .execute_with_cancel("list_scopes", json!({}), &cancel)
            .await;
        assert!(!result.success);
        assert_eq!(result.text(), "Error: Request cancelled");
    }
}
