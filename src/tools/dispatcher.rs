//! Turns an endpoint descriptor plus JSON arguments into a SendGrid call.

use super::catalog;
use crate::error::DispatchError;
use crate::sendgrid::{PreparedRequest, SendgridClient};
use crate::types::{EndpointDescriptor, ParamLocation};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Stateless request dispatcher over a shared client.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: SendgridClient,
}

impl Dispatcher {
    pub fn new(client: SendgridClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SendgridClient {
        &self.client
    }

    /// Invoke a catalog tool by name.
    pub async fn invoke(&self, name: &str, args: &Value) -> Result<Value, DispatchError> {
        let descriptor =
            catalog::find(name).ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        self.call(descriptor, args).await
    }

    /// Invoke a catalog tool, giving up as soon as `cancel` fires.
    pub async fn invoke_with_cancel(
        &self,
        name: &str,
        args: &Value,
        cancel: &CancellationToken,
    ) -> Result<Value, DispatchError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(DispatchError::Cancelled),
            result = self.invoke(name, args) => result,
        }
    }

    /// Validate, render and send one call described by `descriptor`.
    pub async fn call(
        &self,
        descriptor: &EndpointDescriptor,
        args: &Value,
    ) -> Result<Value, DispatchError> {
        let request = self.prepare(descriptor, args)?;
        debug!("Dispatching {}", descriptor.name);
        self.client.execute(request).await
    }

    /// Render the request without sending it.
    pub fn prepare(
        &self,
        descriptor: &EndpointDescriptor,
        args: &Value,
    ) -> Result<PreparedRequest, DispatchError> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(DispatchError::InvalidParameter {
                    tool: descriptor.name.to_string(),
                    name: "arguments".into(),
                    reason: "arguments must be a JSON object".into(),
                })
            }
        };

        validate(descriptor, args)?;

        let segments = render_path(descriptor, args)?;
        let mut url = self.client.endpoint_url(&segments)?;

        let query = query_pairs(descriptor, args);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let body = request_body(descriptor, args)?;

        Ok(PreparedRequest {
            method: descriptor.method,
            url,
            body,
        })
    }
}

/// Required parameters present, declared ones of the right kind.
fn validate(descriptor: &EndpointDescriptor, args: &Map<String, Value>) -> Result<(), DispatchError> {
    for param in descriptor.required_params() {
        if args.get(param.name).map_or(true, Value::is_null) {
            return Err(DispatchError::MissingParameter {
                tool: descriptor.name.to_string(),
                name: param.name.to_string(),
            });
        }
    }

    for param in descriptor.params {
        let Some(value) = args.get(param.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if param.location == ParamLocation::Path && scalar_text(value).is_none() {
            return Err(DispatchError::InvalidParameter {
                tool: descriptor.name.to_string(),
                name: param.name.to_string(),
                reason: "path values must be strings or numbers".into(),
            });
        }
        if param.location == ParamLocation::Path && matches!(value.as_str(), Some("." | "..")) {
            return Err(DispatchError::InvalidParameter {
                tool: descriptor.name.to_string(),
                name: param.name.to_string(),
                reason: "path values cannot be '.' or '..'".into(),
            });
        }
        if param.location != ParamLocation::Path && !param.kind.accepts(value) {
            return Err(DispatchError::InvalidParameter {
                tool: descriptor.name.to_string(),
                name: param.name.to_string(),
                reason: format!("expected {}", param.kind.schema_type()),
            });
        }
    }

    Ok(())
}

/// Split the template into segments, substituting each placeholder once.
fn render_path(
    descriptor: &EndpointDescriptor,
    args: &Map<String, Value>,
) -> Result<Vec<String>, DispatchError> {
    let mut segments = Vec::new();
    for raw in descriptor.path.split('/').filter(|s| !s.is_empty()) {
        let mut segment = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(start) = rest.find('{') {
            segment.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                DispatchError::Config(format!("unterminated placeholder in {}", descriptor.path))
            })?;
            let name = &after[..end];
            let value = args.get(name).and_then(scalar_text).ok_or_else(|| {
                DispatchError::MissingParameter {
                    tool: descriptor.name.to_string(),
                    name: name.to_string(),
                }
            })?;
            segment.push_str(&value);
            rest = &after[end + 1..];
        }
        segment.push_str(rest);
        segments.push(segment);
    }
    Ok(segments)
}

/// Declared query parameters that are present and non-null.
fn query_pairs(descriptor: &EndpointDescriptor, args: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for param in descriptor
        .params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
    {
        match args.get(param.name) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((param.name.to_string(), query_text(item)));
                }
            }
            Some(value) => pairs.push((param.name.to_string(), query_text(value))),
        }
    }
    pairs
}

/// Body fields, plus undeclared arguments on body-carrying methods.
fn request_body(
    descriptor: &EndpointDescriptor,
    args: &Map<String, Value>,
) -> Result<Option<Value>, DispatchError> {
    let mut body = Map::new();
    let mut extra = false;

    for (name, value) in args {
        let location = descriptor.param(name).map(|p| p.location);
        match location {
            Some(ParamLocation::Body) => {}
            Some(_) => continue,
            None if descriptor.method.carries_body() || descriptor.has_body_params() => {
                extra = true;
            }
            None => {
                return Err(DispatchError::UnknownParameter {
                    tool: descriptor.name.to_string(),
                    name: name.clone(),
                })
            }
        }
        if !value.is_null() {
            body.insert(name.clone(), value.clone());
        }
    }

    if descriptor.has_body_params() || extra {
        Ok(Some(Value::Object(body)))
    } else {
        Ok(None)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HttpMethod, ParamKind, ParamSpec};
    use serde_json::json;

    static CREATE_ALERT: EndpointDescriptor = EndpointDescriptor {
        name: "create_alert",
        description: "Create an alert.",
        method: HttpMethod::Post,
        path: "/v3/alerts",
        params: &[
            ParamSpec::body("type", ParamKind::String, "Alert type").required(),
            ParamSpec::body("email_to", ParamKind::String, "Recipient").required(),
            ParamSpec::body("percentage", ParamKind::Integer, "Threshold"),
        ],
    };

    static LIST_BOUNCES: EndpointDescriptor = EndpointDescriptor {
        name: "list_bounces",
        description: "List bounces.",
        method: HttpMethod::Get,
        path: "/v3/suppression/bounces",
        params: &[
            ParamSpec::query("start_time", ParamKind::Integer, "Start"),
            ParamSpec::query("limit", ParamKind::Integer, "Limit"),
            ParamSpec::query("email", ParamKind::String, "Email"),
            ParamSpec::query("ids", ParamKind::Array, "Ids"),
        ],
    };

    static REMOVE_FROM_POOL: EndpointDescriptor = EndpointDescriptor {
        name: "remove_ip_from_pool",
        description: "Remove an IP from a pool.",
        method: HttpMethod::Delete,
        path: "/v3/ips/pools/{pool_name}/ips/{ip}",
        params: &[
            ParamSpec::path("pool_name", "Pool"),
            ParamSpec::path("ip", "IP address"),
        ],
    };

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(SendgridClient::new("https://api.sendgrid.com", "SG.key").unwrap())
    }

    #[test]
    fn substitutes_every_placeholder() {
        let request = dispatcher()
            .prepare(
                &REMOVE_FROM_POOL,
                &json!({"pool_name": "marketing pool", "ip": "10.0.0.1"}),
            )
            .unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.url.as_str(),
            "https://api.sendgrid.com/v3/ips/pools/marketing%20pool/ips/10.0.0.1"
        );
        assert!(!request.url.as_str().contains('{'));
        assert_eq!(request.body, None);
    }

    #[test]
    fn placeholder_syntax_in_values_is_encoded() {
        let request = dispatcher()
            .prepare(&REMOVE_FROM_POOL, &json!({"pool_name": "{ip}", "ip": "1"}))
            .unwrap();
        assert_eq!(
            request.url.path(),
            "/v3/ips/pools/%7Bip%7D/ips/1"
        );
    }

    #[test]
    fn dot_segments_are_rejected() {
        for dots in [".", ".."] {
            let err = dispatcher()
                .prepare(&REMOVE_FROM_POOL, &json!({"pool_name": dots, "ip": "1"}))
                .unwrap_err();
            assert!(
                matches!(err, DispatchError::InvalidParameter { ref name, .. } if name == "pool_name"),
                "got {err:?}"
            );
        }

        let request = dispatcher()
            .prepare(&REMOVE_FROM_POOL, &json!({"pool_name": "...", "ip": "1"}))
            .unwrap();
        assert_eq!(request.url.path(), "/v3/ips/pools/.../ips/1");
    }

    #[test]
    fn numeric_path_values_render_plainly() {
        let request = dispatcher()
            .prepare(&REMOVE_FROM_POOL, &json!({"pool_name": "p", "ip": 42}))
            .unwrap();
        assert_eq!(request.url.path(), "/v3/ips/pools/p/ips/42");
    }

    #[test]
    fn missing_required_parameter() {
        let err = dispatcher()
            .prepare(&REMOVE_FROM_POOL, &json!({"pool_name": "p"}))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MissingParameter { ref name, .. } if name == "ip"
        ));

        let err = dispatcher()
            .prepare(&CREATE_ALERT, &json!({"type": "usage_limit", "email_to": null}))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn null_and_absent_query_params_are_omitted() {
        let request = dispatcher()
            .prepare(&LIST_BOUNCES, &json!({"limit": 10, "email": null}))
            .unwrap();
        assert_eq!(request.url.query(), Some("limit=10"));

        let request = dispatcher().prepare(&LIST_BOUNCES, &json!({})).unwrap();
        assert_eq!(request.url.query(), None);
        assert_eq!(
            request.url.as_str(),
            "https://api.sendgrid.com/v3/suppression/bounces"
        );
    }

    #[test]
    fn array_query_params_repeat_the_key() {
        let request = dispatcher()
            .prepare(&LIST_BOUNCES, &json!({"ids": ["a", "b"], "email": "x@y.com"}))
            .unwrap();
        assert_eq!(request.url.query(), Some("email=x%40y.com&ids=a&ids=b"));
    }

    #[test]
    fn undeclared_argument_rejected_without_body() {
        let err = dispatcher()
            .prepare(&LIST_BOUNCES, &json!({"bogus": 1}))
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownParameter { .. }));
    }

    #[test]
    fn body_collects_fields_and_drops_nulls() {
        let request = dispatcher()
            .prepare(
                &CREATE_ALERT,
                &json!({
                    "type": "stats_notification",
                    "email_to": "ops@example.com",
                    "percentage": null,
                    "frequency": "daily"
                }),
            )
            .unwrap();
        assert_eq!(
            request.body,
            Some(json!({
                "type": "stats_notification",
                "email_to": "ops@example.com",
                "frequency": "daily"
            }))
        );
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn kind_mismatch_is_invalid() {
        let err = dispatcher()
            .prepare(
                &CREATE_ALERT,
                &json!({"type": "usage_limit", "email_to": "a@b.c", "percentage": "90"}),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidParameter { ref name, .. } if name == "percentage"
        ));
    }

    #[test]
    fn non_object_arguments_rejected() {
        let err = dispatcher().prepare(&LIST_BOUNCES, &json!([1, 2])).unwrap_err();
        assert!(err.is_validation());
        assert!(dispatcher().prepare(&LIST_BOUNCES, &Value::Null).is_ok());
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let err = dispatcher().invoke("no_such_tool", &json!({})).await.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(_)));
    }

    #[tokio::test]
    async fn get_api_key_round_trip() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3/api_keys/abc123"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({"name": "k1"})))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(SendgridClient::new(&server.uri(), "SG.key").unwrap());
        let value = dispatcher
            .invoke("get_api_key", &json!({"api_key_id": "abc123"}))
            .await
            .unwrap();
        assert_eq!(value, json!({"name": "k1"}));
    }

    #[tokio::test]
    async fn get_api_key_not_found() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3/api_keys/abc123"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(SendgridClient::new(&server.uri(), "SG.key").unwrap());
        let err = dispatcher
            .invoke("get_api_key", &json!({"api_key_id": "abc123"}))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn validation_failure_sends_nothing() {
        let server = wiremock::MockServer::start().await;
        let dispatcher = Dispatcher::new(SendgridClient::new(&server.uri(), "SG.key").unwrap());

        let err = dispatcher.invoke("get_api_key", &json!({})).await.unwrap_err();
        assert!(err.is_validation());

        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn cancellation_aborts_pending_call() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_secs(10))
                    .set_body_json(json!({})),
            )
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(SendgridClient::new(&server.uri(), "SG.key").unwrap());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = dispatcher
            .invoke_with_cancel("list_scopes", &json!({}), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Cancelled));
    }
}
