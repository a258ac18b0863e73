//! Newline-delimited JSON-RPC server over stdin/stdout.

use super::protocol::{self, RpcError};
use crate::tools::ToolRegistry;
use crate::types::ToolResult;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Cancellation handles of running `tools/call` requests, keyed by JSON id.
type InFlight = Arc<Mutex<HashMap<String, CancellationToken>>>;

/// MCP server over a tool registry.
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    in_flight: InFlight,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Serve on the process's stdin/stdout until EOF or `shutdown`.
    pub async fn serve_stdio(&self, shutdown: CancellationToken) -> Result<()> {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        self.serve(reader, tokio::io::stdout(), shutdown).await
    }

    /// Serve one message per line from `reader`, writing responses to `writer`.
    ///
    /// Each `tools/call` runs on its own task; all output goes through a
    /// single writer task so concurrent responses never interleave.
    pub async fn serve<R, W>(&self, mut reader: R, writer: W, shutdown: CancellationToken) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(
            "MCP server '{}' ready with {} tools",
            protocol::SERVER_NAME,
            self.registry.len()
        );

        let (tx, rx) = mpsc::unbounded_channel();
        let writer_task = tokio::spawn(write_messages(writer, rx));
        let mut calls = JoinSet::new();
        // Partial reads survive an interrupted `read_until`, so the buffer
        // is only cleared once a full line has been handled.
        let mut buf = Vec::new();

        loop {
            let read = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping MCP server");
                    break;
                }
                Some(_) = calls.join_next(), if !calls.is_empty() => continue,
                read = reader.read_until(b'\n', &mut buf) => {
                    read.context("Failed to read MCP message")?
                }
            };

            if read == 0 && buf.is_empty() {
                debug!("Input closed, stopping MCP server");
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => self.handle_line(line, &tx, &shutdown, &mut calls),
                Err(e) => Some(protocol::error_response(
                    Value::Null,
                    RpcError::parse_error(e),
                )),
            };
            buf.clear();

            if let Some(response) = response {
                let _ = tx.send(response);
            }
        }

        while calls.join_next().await.is_some() {}
        drop(tx);

        writer_task
            .await
            .context("MCP writer task failed")?
            .context("Failed to write MCP response")?;
        Ok(())
    }

    /// Handle one raw line; returns an immediate response, if any.
    fn handle_line(
        &self,
        line: &str,
        tx: &UnboundedSender<Value>,
        shutdown: &CancellationToken,
        calls: &mut JoinSet<()>,
    ) -> Option<Value> {
        let incoming: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(protocol::error_response(
                    Value::Null,
                    RpcError::parse_error(e),
                ))
            }
        };

        let Some(obj) = incoming.as_object() else {
            return Some(protocol::error_response(
                Value::Null,
                RpcError::invalid_request("Request must be a JSON object"),
            ));
        };

        if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            let id = obj.get("id").cloned().unwrap_or(Value::Null);
            return Some(protocol::error_response(
                id,
                RpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        // Client responses carry no method; the server never sends requests.
        let method = obj.get("method").and_then(Value::as_str)?;
        let params = obj.get("params").cloned().unwrap_or(Value::Null);

        match obj.get("id").cloned() {
            Some(id) => self.handle_request(id, method, params, tx, shutdown, calls),
            None => {
                self.handle_notification(method, &params);
                None
            }
        }
    }

    fn handle_request(
        &self,
        id: Value,
        method: &str,
        params: Value,
        tx: &UnboundedSender<Value>,
        shutdown: &CancellationToken,
        calls: &mut JoinSet<()>,
    ) -> Option<Value> {
        let result = match method {
            "initialize" => Ok(protocol::initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.definitions() })),
            "tools/call" => match self.start_call(id.clone(), params, tx, shutdown, calls) {
                Ok(()) => return None,
                Err(e) => Err(e),
            },
            other => Err(RpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(payload) => protocol::success_response(id, payload),
            Err(err) => protocol::error_response(id, err),
        })
    }

    fn handle_notification(&self, method: &str, params: &Value) {
        match method {
            "notifications/cancelled" => {
                let Some(request_id) = params.get("requestId") else {
                    return;
                };
                let key = request_id.to_string();
                let in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
                if let Some(token) = in_flight.get(&key) {
                    info!("Cancelling tools/call {}", key);
                    token.cancel();
                }
            }
            other => debug!("Ignoring notification {}", other),
        }
    }

    /// Validate a `tools/call` and run it on its own task.
    fn start_call(
        &self,
        id: Value,
        params: Value,
        tx: &UnboundedSender<Value>,
        shutdown: &CancellationToken,
        calls: &mut JoinSet<()>,
    ) -> Result<(), RpcError> {
        let params = params
            .as_object()
            .ok_or_else(|| RpcError::invalid_params("tools/call params must be an object"))?;

        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_params("tools/call requires string field 'name'"))?
            .to_string();

        let args = match params.get("arguments") {
            Some(Value::Object(map)) => Value::Object(map.clone()),
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(_) => {
                return Err(RpcError::invalid_params(
                    "tools/call 'arguments' must be an object",
                ))
            }
        };

        if self.registry.get(&name).is_none() {
            return Err(RpcError::invalid_params(format!("Unknown tool: {}", name)));
        }

        let key = id.to_string();
        let token = shutdown.child_token();
        {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if in_flight.contains_key(&key) {
                return Err(RpcError::invalid_request(format!(
                    "Request id {} is already in flight",
                    key
                )));
            }
            in_flight.insert(key.clone(), token.clone());
        }

        let registry = Arc::clone(&self.registry);
        let in_flight = Arc::clone(&self.in_flight);
        let tx = tx.clone();
        calls.spawn(async move {
            debug!("tools/call {} (id {})", name, key);
            let result = registry.execute_with_cancel(&name, args, &token).await;
            in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key);

            if token.is_cancelled() {
                debug!("Dropping response to cancelled call {}", key);
                return;
            }
            let _ = tx.send(protocol::success_response(id, call_result(&result)));
        });

        Ok(())
    }
}

/// Shape a tool result as an MCP `tools/call` result.
fn call_result(result: &ToolResult) -> Value {
    let text = result.text();
    let text = if text.is_empty() { "null".to_string() } else { text };

    let mut payload = json!({
        "content": [{ "type": "text", "text": text }],
        "isError": !result.success,
    });
    if result.success && result.output.is_object() {
        payload["structuredContent"] = result.output.clone();
    }
    payload
}

async fn write_messages<W>(mut writer: W, mut rx: UnboundedReceiver<Value>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = rx.recv().await {
        let mut line = message.to_string();
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sendgrid::SendgridClient;
    use crate::tools::{catalog, Dispatcher};
    use tokio::io::AsyncReadExt;

    fn server_for(uri: &str) -> McpServer {
        let client = SendgridClient::new(uri, "SG.key").unwrap();
        McpServer::new(ToolRegistry::from_catalog(Dispatcher::new(client)))
    }

    /// Feed `input` to the server and collect every response line.
    async fn run(server: &McpServer, input: &str) -> Vec<Value> {
        run_bytes(server, input.as_bytes()).await
    }

    async fn run_bytes(server: &McpServer, input: &[u8]) -> Vec<Value> {
        let (client_side, server_side) = tokio::io::duplex(1 << 22);
        let reader = tokio::io::BufReader::new(input);
        server
            .serve(reader, server_side, CancellationToken::new())
            .await
            .unwrap();

        let mut output = String::new();
        let mut client_side = client_side;
        client_side.read_to_string(&mut output).await.unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn response_for(responses: &[Value], id: i64) -> &Value {
        responses
            .iter()
            .find(|r| r["id"] == json!(id))
            .unwrap_or_else(|| panic!("no response for id {id}: {responses:?}"))
    }

    #[tokio::test]
    async fn initialize_and_list_tools() {
        let server = server_for("https://api.sendgrid.com");
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
            "\n",
        );
        let responses = run(&server, input).await;
        assert_eq!(responses.len(), 3);

        let init = response_for(&responses, 1);
        assert_eq!(init["result"]["serverInfo"]["name"], "sendgrid");
        assert_eq!(init["result"]["protocolVersion"], protocol::PROTOCOL_VERSION);

        let tools = response_for(&responses, 2)["result"]["tools"]
            .as_array()
            .unwrap();
        assert_eq!(tools.len(), catalog::len());
        let send_mail = tools.iter().find(|t| t["name"] == "send_mail").unwrap();
        assert_eq!(send_mail["inputSchema"]["type"], "object");

        assert_eq!(response_for(&responses, 3)["result"], json!({}));
    }

    #[tokio::test]
    async fn protocol_errors() {
        let server = server_for("https://api.sendgrid.com");
        let input = concat!(
            "not json\n",
            r#"{"jsonrpc":"1.0","id":1,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"nope"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_scopes","arguments":[1]}}"#,
            "\n",
        );
        let responses = run(&server, input).await;
        assert_eq!(responses.len(), 5);

        let parse = responses
            .iter()
            .find(|r| r["id"].is_null())
            .unwrap();
        assert_eq!(parse["error"]["code"], -32700);
        assert_eq!(response_for(&responses, 1)["error"]["code"], -32600);
        assert_eq!(response_for(&responses, 2)["error"]["code"], -32601);
        assert_eq!(response_for(&responses, 3)["error"]["code"], -32602);
        assert_eq!(response_for(&responses, 4)["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_parse_error() {
        let server = server_for("https://api.sendgrid.com");
        let mut input = b"\xff\xfe bad\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        input.push(b'\n');

        let responses = run_bytes(&server, &input).await;
        assert_eq!(responses.len(), 2);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(response_for(&responses, 1)["result"], json!({}));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_handled() {
        let server = server_for("https://api.sendgrid.com");
        let responses = run(&server, r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 4);
    }

    #[tokio::test]
    async fn duplicate_in_flight_id_is_rejected() {
        let mock = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_secs(30))
                    .set_body_json(json!({})),
            )
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"list_scopes"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"list_scopes"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{"requestId":5}}"#,
            "\n",
        );
        let responses = run(&server, input).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 5);
        assert_eq!(responses[0]["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn tools_call_relays_sendgrid_response() {
        let mock = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3/api_keys/abc123"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({"name": "k1"})))
            .mount(&mock)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3/api_keys/missing"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"get_api_key","arguments":{"api_key_id":"abc123"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_api_key","arguments":{"api_key_id":"missing"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_api_key"}}"#,
            "\n",
        );
        let responses = run(&server, input).await;
        assert_eq!(responses.len(), 3);

        let ok = &response_for(&responses, 1)["result"];
        assert_eq!(ok["isError"], false);
        assert_eq!(ok["structuredContent"], json!({"name": "k1"}));

        let not_found = &response_for(&responses, 2)["result"];
        assert_eq!(not_found["isError"], true);
        assert!(not_found["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("404"));

        let invalid = &response_for(&responses, 3)["result"];
        assert_eq!(invalid["isError"], true);
        assert!(invalid["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("api_key_id"));
    }

    #[tokio::test]
    async fn cancelled_call_gets_no_response() {
        let mock = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_secs(30))
                    .set_body_json(json!({})),
            )
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"list_scopes"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{"requestId":7}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#,
            "\n",
        );
        let responses = run(&server, input).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 8);
    }

    #[test]
    fn call_result_shapes() {
        let empty = call_result(&ToolResult::ok(Value::Null));
        assert_eq!(empty["content"][0]["text"], "null");
        assert!(empty.get("structuredContent").is_none());

        let list = call_result(&ToolResult::ok(json!([1, 2])));
        assert_eq!(list["isError"], false);
        assert!(list.get("structuredContent").is_none());
    }
}
