//! First-run interactive setup wizard.
//!
//! Steps:
//! 1. Display banner
//! 2. Collect API URL and key
//! 3. Collect transport settings
//! 4. Write config.toml

use crate::config::{self, SendgridConfig, CONFIG_FILE};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// ASCII banner displayed during setup.
const BANNER: &str = r#"
  ____                _  ____      _     _
 / ___|  ___ _ __   __| |/ ___|_ __(_) __| |
 \___ \ / _ \ '_ \ / _` | |  _| '__| |/ _` |
  ___) |  __/ | | | (_| | |_| | |  | | (_| |
 |____/ \___|_| |_|\__,_|\____|_|  |_|\__,_|

            SendGrid v3 tool server
"#;

/// Run the interactive setup wizard on stdin/stdout.
pub fn run_setup_wizard(home_dir: &Path) -> Result<SendgridConfig> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();
    run_setup_with(&mut reader, &mut out, home_dir)
}

/// Run the wizard against arbitrary input and output streams.
///
/// Values already present in `home_dir/config.toml` are offered as defaults.
pub fn run_setup_with(
    reader: &mut impl BufRead,
    out: &mut impl Write,
    home_dir: &Path,
) -> Result<SendgridConfig> {
    let config_path = home_dir.join(CONFIG_FILE);
    let existing = config::load_config(&config_path)?;

    writeln!(out, "{}", BANNER)?;
    writeln!(out, "Welcome to sendgrid-tools setup.\n")?;

    // Step 1: API
    writeln!(out, "[1/3] SendGrid API")?;
    let api_url = prompt_with_default(reader, out, "  API URL", &existing.api_url)?;
    let key_label = if existing.api_key.is_empty() {
        format!(
            "  API key (or press Enter to read {} at runtime)",
            existing.api_key_env
        )
    } else {
        format!(
            "  API key (Enter keeps the stored key, '-' reads {} at runtime)",
            existing.api_key_env
        )
    };
    let answer = prompt(reader, out, &key_label)?;
    let api_key = match answer.as_str() {
        "" => existing.api_key.clone(),
        "-" => String::new(),
        _ => answer,
    };

    // Step 2: Transport
    writeln!(out, "\n[2/3] Requests")?;
    let timeout = prompt_with_default(
        reader,
        out,
        "  Request timeout (seconds)",
        &existing.timeout_secs.to_string(),
    )?;
    let timeout_secs: u64 = timeout
        .parse()
        .with_context(|| format!("Invalid timeout '{}': expected whole seconds", timeout))?;
    let on_behalf_of = prompt(
        reader,
        out,
        "  Subuser to act on behalf of (or press Enter for none)",
    )?;

    // Step 3: Write files
    writeln!(out, "\n[3/3] Writing configuration...")?;

    let config = SendgridConfig {
        api_url,
        api_key,
        timeout_secs,
        on_behalf_of,
        ..existing
    };

    config::save_config(&config, &config_path)?;
    writeln!(out, "  Written: {}", config_path.display())?;
    writeln!(out, "\nSetup complete! Run `sendgrid-tools serve` to start.\n")?;

    Ok(config)
}

/// Prompt the user for input with a label.
fn prompt(reader: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String> {
    write!(out, "{}: ", label)?;
    out.flush()?;
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt with a default value.
fn prompt_with_default(
    reader: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(out, "{} [{}]: ", label, default)?;
    out.flush()?;
    let mut input = String::new();
    reader.read_line(&mut input)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn writes_answers_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new("\nSG.secret\n45\nsubuser-a\n");
        let mut out = Vec::new();

        let config = run_setup_with(&mut input, &mut out, dir.path()).unwrap();
        assert_eq!(config.api_url, "https://api.sendgrid.com");
        assert_eq!(config.api_key, "SG.secret");
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.on_behalf_of, "subuser-a");

        let saved = config::load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(saved, config);
        assert!(String::from_utf8(out).unwrap().contains("Setup complete"));
    }

    #[test]
    fn blank_answers_keep_existing_values() {
        let dir = tempfile::tempdir().unwrap();
        let existing = SendgridConfig {
            api_url: "http://localhost:3000".into(),
            api_key: "SG.old".into(),
            timeout_secs: 10,
            ..SendgridConfig::default()
        };
        config::save_config(&existing, &dir.path().join(CONFIG_FILE)).unwrap();

        let mut input = Cursor::new("\n\n\n\n");
        let config = run_setup_with(&mut input, &mut Vec::new(), dir.path()).unwrap();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.api_key, "SG.old");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.on_behalf_of.is_empty());
    }

    #[test]
    fn dash_switches_back_to_env_key() {
        let dir = tempfile::tempdir().unwrap();
        let existing = SendgridConfig {
            api_key: "SG.old".into(),
            ..SendgridConfig::default()
        };
        config::save_config(&existing, &dir.path().join(CONFIG_FILE)).unwrap();

        let mut input = Cursor::new("\n-\n\n\n");
        let mut out = Vec::new();
        let config = run_setup_with(&mut input, &mut out, dir.path()).unwrap();
        assert!(config.api_key.is_empty());
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Enter keeps the stored key"));

        let saved = config::load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(saved.api_key.is_empty());
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new("\n\nsoon\n\n");
        assert!(run_setup_with(&mut input, &mut Vec::new(), dir.path()).is_err());
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }
}
