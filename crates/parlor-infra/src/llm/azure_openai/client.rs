//! AzureOpenAiProvider -- concrete [`CompletionProvider`] implementation.
//!
//! Sends non-streaming chat-completion requests to an Azure OpenAI
//! deployment endpoint. The API key is wrapped in [`secrecy::SecretString`]
//! and is only exposed when constructing the `api-key` request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parlor_core::llm::CompletionProvider;
use parlor_types::config::ProviderSettings;
use parlor_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{AzureChatMessage, AzureChatRequest, AzureChatResponse};

/// Azure OpenAI completion provider.
///
/// Implements [`CompletionProvider`] against the chat-completions API of a
/// named deployment.
pub struct AzureOpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
    deployment: String,
    api_version: String,
}

// AzureOpenAiProvider intentionally does NOT derive Debug: the SecretString
// field already redacts the key, but omitting Debug keeps the whole request
// configuration out of logs.

impl AzureOpenAiProvider {
    /// Create a new provider from settings and an API key.
    pub fn new(settings: &ProviderSettings, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            deployment: settings.deployment.clone(),
            api_version: settings.api_version.clone(),
        }
    }

    /// Full chat-completions URL for the configured deployment.
    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    /// Convert a generic [`CompletionRequest`] into the Azure wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> AzureChatRequest {
        AzureChatRequest {
            messages: request
                .messages
                .iter()
                .map(|m| AzureChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}

impl CompletionProvider for AzureOpenAiProvider {
    fn name(&self) -> &str {
        "azure_openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);

        let response = self
            .client
            .post(self.url())
            .header("api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                503 | 529 => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let wire: AzureChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = wire
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                LlmError::Deserialization("response contained no completion text".to_string())
            })?;

        let total_tokens_used = wire.usage.map(|u| u.total_tokens).unwrap_or(0);

        Ok(CompletionResponse {
            text,
            total_tokens_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AzureOpenAiProvider {
        let settings = ProviderSettings {
            endpoint: "https://example.openai.azure.com/".to_string(),
            deployment: "gpt-4o".to_string(),
            ..ProviderSettings::default()
        };
        AzureOpenAiProvider::new(&settings, SecretString::from("test-key"))
    }

    #[test]
    fn test_url_joins_endpoint_deployment_and_version() {
        assert_eq!(
            provider().url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn test_wire_request_carries_generation_params() {
        use parlor_types::llm::{Message, MessageRole};

        let p = provider();
        let request = CompletionRequest {
            messages: vec![Message {
                role: MessageRole::System,
                content: "preamble".to_string(),
            }],
            max_output_tokens: 512,
            temperature: 0.3,
        };
        let wire = p.to_wire_request(&request);
        assert_eq!(wire.max_tokens, 512);
        assert!((wire.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(wire.messages[0].role, "system");
    }
}
