//! Configuration schema for config.toml.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API key when none is configured.
pub const DEFAULT_API_KEY_ENV: &str = "SENDGRID_API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendgridConfig {
    /// SendGrid API base URL.
    pub api_url: String,

    /// API key. Leave empty to read it from `api_key_env` at runtime.
    pub api_key: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Subuser to act on behalf of (sent as the `on-behalf-of` header).
    pub on_behalf_of: String,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for SendgridConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.sendgrid.com".into(),
            api_key: String::new(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            timeout_secs: 30,
            user_agent: format!("sendgrid-tools/{}", env!("CARGO_PKG_VERSION")),
            on_behalf_of: String::new(),
            log_level: "info".into(),
        }
    }
}

impl SendgridConfig {
    /// Effective API key: the configured one, else the environment variable.
    pub fn resolved_api_key(&self) -> Option<String> {
        if !self.api_key.is_empty() {
            return Some(self.api_key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Subuser header value, if one is configured.
    pub fn on_behalf_of(&self) -> Option<&str> {
        let trimmed = self.on_behalf_of.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
