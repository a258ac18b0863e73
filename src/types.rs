//! Shared types describing SendGrid endpoints and tool results.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// HTTP methods
// ---------------------------------------------------------------------------

/// HTTP verbs used by the SendGrid v3 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl HttpMethod {
    /// Whether undeclared arguments may be folded into a JSON body.
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// JSON type accepted for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    /// JSON-Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Check whether a (non-null) JSON value fits this kind.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// A single named parameter of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    /// A path placeholder. Always required.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            kind: ParamKind::String,
            required: true,
            description,
        }
    }

    /// An optional query-string parameter.
    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind,
            required: false,
            description,
        }
    }

    /// An optional JSON body field.
    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Body,
            kind,
            required: false,
            description,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint descriptors
// ---------------------------------------------------------------------------

/// Static definition of one SendGrid operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Tool name, unique across the catalog.
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the API root, e.g. `/v3/api_keys/{api_key_id}`.
    pub path: &'static str,
    pub params: &'static [ParamSpec],
}

impl EndpointDescriptor {
    /// Names of the `{placeholder}` tokens in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &'static ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }

    pub fn has_body_params(&self) -> bool {
        self.params
            .iter()
            .any(|p| p.location == ParamLocation::Body)
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
        }
        let required: Vec<&str> = self.required_params().map(|p| p.name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

// ---------------------------------------------------------------------------
// Tool results
// ---------------------------------------------------------------------------

/// Result of executing a tool, as reported to a protocol client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub output: Value,
    pub success: bool,
}

impl ToolResult {
    pub fn ok(output: Value) -> Self {
        Self {
            output,
            success: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            output: Value::String(message.into()),
            success: false,
        }
    }

    /// Render the output as text (pretty JSON for structured payloads).
    pub fn text(&self) -> String {
        match &self.output {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEMPLATE_VERSION: EndpointDescriptor = EndpointDescriptor {
        name: "get_template_version",
        description: "Retrieve a template version.",
        method: HttpMethod::Get,
        path: "/v3/templates/{template_id}/versions/{version_id}",
        params: &[
            ParamSpec::path("template_id", "Template ID"),
            ParamSpec::path("version_id", "Version ID"),
            ParamSpec::query("limit", ParamKind::Integer, "Page size"),
        ],
    };

    #[test]
    fn placeholders_in_order() {
        assert_eq!(
            TEMPLATE_VERSION.placeholders(),
            vec!["template_id", "version_id"]
        );
    }

    #[test]
    fn schema_lists_required_path_params() {
        let schema = TEMPLATE_VERSION.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["required"], json!(["template_id", "version_id"]));
    }

    #[test]
    fn kind_accepts_matching_values() {
        assert!(ParamKind::Integer.accepts(&json!(5)));
        assert!(!ParamKind::Integer.accepts(&json!(5.5)));
        assert!(ParamKind::Number.accepts(&json!(5)));
        assert!(ParamKind::Array.accepts(&json!(["a"])));
        assert!(!ParamKind::String.accepts(&json!(1)));
    }

    #[test]
    fn tool_result_text_renders_json() {
        assert_eq!(ToolResult::error("boom").text(), "boom");
        assert_eq!(ToolResult::ok(Value::Null).text(), "");
        assert!(ToolResult::ok(json!({"a": 1})).text().contains("\"a\": 1"));
    }
}
