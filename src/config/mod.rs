pub mod schema;

pub use schema::{SendgridConfig, DEFAULT_API_KEY_ENV};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SENDGRID_API_URL";

/// Default home directory (~/.sendgrid-tools).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".sendgrid-tools"))
        .unwrap_or_else(|| PathBuf::from(".sendgrid-tools"))
}

/// Load `config.toml`, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<SendgridConfig> {
    if !path.exists() {
        return Ok(SendgridConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse {} (TOML)", path.display()))
}

/// Write `config` as pretty TOML, creating parent directories.
pub fn save_config(config: &SendgridConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Apply environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: &mut SendgridConfig) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_url = url.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, SendgridConfig::default());
        assert_eq!(config.api_url, "https://api.sendgrid.com");
        assert_eq!(config.api_key_env, "SENDGRID_API_KEY");
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = SendgridConfig {
            api_key: "SG.test".into(),
            timeout_secs: 5,
            on_behalf_of: "subuser-a".into(),
            ..SendgridConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "timeout_secs = 7\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.api_url, "https://api.sendgrid.com");
    }

    #[test]
    fn explicit_key_wins_over_env() {
        let config = SendgridConfig {
            api_key: "SG.explicit".into(),
            api_key_env: "SENDGRID_TOOLS_TEST_UNUSED_KEY".into(),
            ..SendgridConfig::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("SG.explicit"));
    }

    #[test]
    fn key_read_from_named_env_var() {
        std::env::set_var("SENDGRID_TOOLS_TEST_KEY", "SG.from-env");
        let config = SendgridConfig {
            api_key_env: "SENDGRID_TOOLS_TEST_KEY".into(),
            ..SendgridConfig::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("SG.from-env"));

        let unset = SendgridConfig {
            api_key_env: "SENDGRID_TOOLS_TEST_KEY_ABSENT".into(),
            ..SendgridConfig::default()
        };
        assert_eq!(unset.resolved_api_key(), None);
    }

    #[test]
    fn api_url_env_override() {
        let mut config = SendgridConfig::default();
        std::env::set_var(API_URL_ENV, "  http://localhost:3000  ");
        apply_env_overrides(&mut config);
        assert_eq!(config.api_url, "http://localhost:3000");

        let mut config = SendgridConfig::default();
        std::env::set_var(API_URL_ENV, "   ");
        apply_env_overrides(&mut config);
        assert_eq!(config.api_url, "https://api.sendgrid.com");

        std::env::remove_var(API_URL_ENV);
        apply_env_overrides(&mut config);
        assert_eq!(config.api_url, "https://api.sendgrid.com");
    }

    #[test]
    fn blank_on_behalf_of_is_none() {
        let config = SendgridConfig {
            on_behalf_of: "  ".into(),
            ..SendgridConfig::default()
        };
        assert_eq!(config.on_behalf_of(), None);
    }
}
