//! Configuration types for Parlor.
//!
//! Deserialized from `parlor.toml` by parlor-infra. Every field has a
//! default so a missing or partial file still yields a usable config.
//! The provider API key is never part of the file; it is read from the
//! environment at startup.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub chat: ChatSettings,
    pub provider: ProviderSettings,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Conversation state settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Maximum turns retained per session; the oldest turn is evicted first
    /// when an append would exceed this.
    pub max_history_turns: usize,
    /// Maximum stored turns included in each outbound prompt. Older turns
    /// stay in the store but are dropped from the prompt.
    pub max_context_messages: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            max_history_turns: 50,
            max_context_messages: 10,
        }
    }
}

/// Completion provider settings.
///
/// `endpoint` and `deployment` have no usable defaults and must be set for
/// the service to start; the generation parameters default to the values the
/// provider documentation recommends for conversational use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the provider (e.g., "https://myresource.openai.azure.com").
    pub endpoint: String,
    /// Deployment (model) name to address.
    pub deployment: String,
    /// API version query parameter.
    pub api_version: String,
    /// Maximum tokens the provider may generate per response.
    pub max_output_tokens: u32,
    /// Sampling temperature (0.0 - 1.0).
    pub temperature: f32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            deployment: String::new(),
            api_version: "2024-06-01".to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
        }
    }
}
