//! Errors raised while dispatching a tool call to SendGrid.

use serde_json::Value;

/// Failure of a single tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{tool}: missing required parameter '{name}'")]
    MissingParameter { tool: String, name: String },

    #[error("{tool}: invalid parameter '{name}': {reason}")]
    InvalidParameter {
        tool: String,
        name: String,
        reason: String,
    },

    #[error("{tool}: unknown parameter '{name}'")]
    UnknownParameter { tool: String, name: String },

    #[error("SendGrid API error ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        body: String,
    },

    #[error("SendGrid request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read SendGrid response: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DispatchError {
    /// HTTP status code, for errors that came back from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the call was rejected before any network traffic.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_)
                | Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
                | Self::UnknownParameter { .. }
        )
    }

    /// Build an HTTP error from a non-2xx status and its raw body.
    pub fn http(status: reqwest::StatusCode, body: String) -> Self {
        let message = error_messages(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
        Self::Http {
            status: status.as_u16(),
            message,
            body,
        }
    }
}

/// Pull `errors[].message` out of a SendGrid error payload.
fn error_messages(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let messages: Vec<&str> = parsed
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|e| e.get("message").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn http_error_uses_sendgrid_messages() {
        let body = r#"{"errors":[{"field":null,"message":"access forbidden"},{"message":"scope missing"}]}"#;
        let err = DispatchError::http(StatusCode::FORBIDDEN, body.to_string());
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.to_string(),
            "SendGrid API error (403): access forbidden; scope missing"
        );
    }

    #[test]
    fn http_error_falls_back_to_reason() {
        let err = DispatchError::http(StatusCode::NOT_FOUND, "not json".into());
        assert_eq!(err.to_string(), "SendGrid API error (404): Not Found");
        match err {
            DispatchError::Http { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_classification() {
        let missing = DispatchError::MissingParameter {
            tool: "get_api_key".into(),
            name: "api_key_id".into(),
        };
        assert!(missing.is_validation());
        assert!(!DispatchError::Cancelled.is_validation());
        assert_eq!(missing.status(), None);
    }
}
