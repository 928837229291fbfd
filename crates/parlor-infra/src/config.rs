//! Configuration loader for Parlor.
//!
//! Reads a TOML config file (default `parlor.toml`, overridable via
//! `--config` or `PARLOR_CONFIG`) and deserializes it into [`AppConfig`].
//! Falls back to defaults when the file is missing or malformed.
//!
//! The provider API key is deliberately not part of the file; it is read
//! from the `PARLOR_API_KEY` environment variable into a [`SecretString`].

use std::path::Path;

use secrecy::SecretString;

use parlor_types::config::AppConfig;

/// Environment variable holding the completion provider API key.
pub const API_KEY_ENV: &str = "PARLOR_API_KEY";

/// Load application configuration from a TOML file.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config (missing sections keep defaults).
pub async fn load_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Read the provider API key from the environment.
///
/// Fails at startup rather than on the first request so misconfiguration is
/// caught immediately.
pub fn api_key_from_env() -> anyhow::Result<SecretString> {
    let key = std::env::var(API_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{API_KEY_ENV} is not set"))?;
    if key.trim().is_empty() {
        anyhow::bail!("{API_KEY_ENV} is empty");
    }
    Ok(SecretString::from(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("parlor.toml")).await;
        assert_eq!(config.chat.max_history_turns, 50);
        assert!(config.provider.endpoint.is_empty());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parlor.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
port = 9090

[chat]
max_history_turns = 12
max_context_messages = 4

[provider]
endpoint = "https://example.openai.azure.com"
deployment = "gpt-4o"
temperature = 0.2
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.chat.max_history_turns, 12);
        assert_eq!(config.chat.max_context_messages, 4);
        assert_eq!(config.provider.deployment, "gpt-4o");
        assert!((config.provider.temperature - 0.2).abs() < f32::EPSILON);
        // Unspecified values keep defaults.
        assert_eq!(config.provider.max_output_tokens, 1000);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parlor.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.chat.max_history_turns, 50);
    }
}
