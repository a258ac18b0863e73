//! SendGrid v3 API client: authenticated transport and response decoding.

use crate::config::SendgridConfig;
use crate::error::DispatchError;
use crate::types::HttpMethod;
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// A fully rendered request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<Value>,
}

/// SendGrid API client.
#[derive(Clone)]
pub struct SendgridClient {
    base_url: Url,
    api_key: String,
    on_behalf_of: Option<String>,
    http: reqwest::Client,
}

impl fmt::Debug for SendgridClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendgridClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("on_behalf_of", &self.on_behalf_of)
            .finish()
    }
}

impl SendgridClient {
    /// Create a client with default transport settings.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Self::with_http(base_url, api_key, None, http)
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &SendgridConfig) -> Result<Self, DispatchError> {
        let api_key = config.resolved_api_key().ok_or_else(|| {
            DispatchError::Config(format!(
                "no API key configured; set api_key in config.toml or export {}",
                config.api_key_env
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(config.user_agent.clone())
            .build()?;

        Self::with_http(
            &config.api_url,
            &api_key,
            config.on_behalf_of().map(str::to_string),
            http,
        )
    }

    fn with_http(
        base_url: &str,
        api_key: &str,
        on_behalf_of: Option<String>,
        http: reqwest::Client,
    ) -> Result<Self, DispatchError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| DispatchError::Config(format!("invalid API URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DispatchError::Config(format!(
                "API URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            on_behalf_of,
            http,
        })
    }

    /// Subuser sent in the `on-behalf-of` header.
    pub fn with_on_behalf_of(mut self, subuser: impl Into<String>) -> Self {
        self.on_behalf_of = Some(subuser.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append already-rendered path segments to the base URL.
    ///
    /// Each segment is percent-encoded, so a value may never introduce
    /// extra path levels or template syntax.
    pub fn endpoint_url<I, S>(&self, segments: I) -> Result<Url, DispatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                DispatchError::Config(format!("API URL '{}' cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
        Ok(url)
    }

    /// Send a prepared request and decode the response body.
    pub async fn execute(&self, request: PreparedRequest) -> Result<Value, DispatchError> {
        debug!("SendGrid {} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method.into(), request.url.clone())
            .bearer_auth(&self.api_key);
        if let Some(subuser) = &self.on_behalf_of {
            builder = builder.header("on-behalf-of", subuser);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(
                "SendGrid {} {} failed ({})",
                request.method,
                request.url.path(),
                status
            );
            return Err(DispatchError::http(status, body));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| DispatchError::Decode(e.to_string()))?;
        Ok(decode_body(&text))
    }
}

/// Decode a success body: empty → null, JSON → value, otherwise a string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(client: &SendgridClient, segments: &[&str]) -> PreparedRequest {
        PreparedRequest {
            method: HttpMethod::Get,
            url: client.endpoint_url(segments).unwrap(),
            body: None,
        }
    }

    #[test]
    fn endpoint_url_encodes_segments() {
        let client = SendgridClient::new("https://api.sendgrid.com/", "key").unwrap();
        let url = client
            .endpoint_url(["v3", "suppression", "bounces", "a b/{c}@example.com"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.sendgrid.com/v3/suppression/bounces/a%20b%2F%7Bc%7D@example.com"
        );
    }

    #[test]
    fn endpoint_url_keeps_base_path() {
        let client = SendgridClient::new("http://localhost:9000/proxy", "key").unwrap();
        let url = client.endpoint_url(["v3", "scopes"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/v3/scopes");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            SendgridClient::new("not a url", "key"),
            Err(DispatchError::Config(_))
        ));
        assert!(matches!(
            SendgridClient::new("mailto:ops@example.com", "key"),
            Err(DispatchError::Config(_))
        ));
    }

    #[test]
    fn missing_key_is_config_error() {
        let config = SendgridConfig {
            api_key_env: "SENDGRID_TOOLS_CLIENT_TEST_ABSENT".into(),
            ..SendgridConfig::default()
        };
        assert!(matches!(
            SendgridClient::from_config(&config),
            Err(DispatchError::Config(_))
        ));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = SendgridClient::new("https://api.sendgrid.com", "SG.secret").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("SG.secret"));
        assert!(rendered.contains("api.sendgrid.com"));
    }

    #[test]
    fn decode_body_variants() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(decode_body("plain"), json!("plain"));
    }

    #[tokio::test]
    async fn sends_bearer_token_and_decodes_json() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3/scopes"))
            .and(wiremock::matchers::header("authorization", "Bearer SG.key"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"scopes": ["mail.send"]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SendgridClient::new(&server.uri(), "SG.key").unwrap();
        let value = client.execute(get(&client, &["v3", "scopes"])).await.unwrap();
        assert_eq!(value, json!({"scopes": ["mail.send"]}));
    }

    #[tokio::test]
    async fn sends_on_behalf_of_header() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header("on-behalf-of", "subuser-a"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = SendgridClient::new(&server.uri(), "SG.key")
            .unwrap()
            .with_on_behalf_of("subuser-a");
        let value = client.execute(get(&client, &["v3", "senders"])).await.unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn no_content_decodes_to_null() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .respond_with(wiremock::ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = SendgridClient::new(&server.uri(), "SG.key").unwrap();
        let request = PreparedRequest {
            method: HttpMethod::Delete,
            url: client.endpoint_url(["v3", "api_keys", "abc"]).unwrap(),
            body: None,
        };
        assert_eq!(client.execute(request).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_json(
                json!({"errors": [{"field": null, "message": "authorization required"}]}),
            ))
            .mount(&server)
            .await;

        let client = SendgridClient::new(&server.uri(), "SG.bad").unwrap();
        let err = client
            .execute(get(&client, &["v3", "user", "profile"]))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("authorization required"));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = SendgridClient::new(&format!("http://127.0.0.1:{}", port), "SG.key").unwrap();
        let err = client
            .execute(get(&client, &["v3", "scopes"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Transport(_)), "got {err:?}");
    }
}
