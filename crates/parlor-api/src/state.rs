//! Application state wiring the orchestrator to its concrete provider.
//!
//! The orchestrator is generic over the completion provider; AppState pins
//! it to the Azure OpenAI implementation from parlor-infra.

use std::sync::Arc;

use parlor_core::chat::{ConversationOrchestrator, GenerationParams};
use parlor_core::session::SessionStore;
use parlor_infra::config::api_key_from_env;
use parlor_infra::llm::AzureOpenAiProvider;
use parlor_types::config::AppConfig;

/// Concrete orchestrator type pinned to the infra provider.
pub type ConcreteOrchestrator = ConversationOrchestrator<AzureOpenAiProvider>;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConcreteOrchestrator>,
}

// Manual impl because the provider inside the orchestrator deliberately
// does not derive Debug (it holds the API key).
impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the session store, provider, and orchestrator from configuration.
    ///
    /// Fails fast on missing provider settings or API key so misconfiguration
    /// surfaces at startup, not on the first request.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        if config.provider.endpoint.trim().is_empty() {
            anyhow::bail!("provider.endpoint is not configured");
        }
        if config.provider.deployment.trim().is_empty() {
            anyhow::bail!("provider.deployment is not configured");
        }

        let api_key = api_key_from_env()?;
        let provider = AzureOpenAiProvider::new(&config.provider, api_key);

        let store = Arc::new(SessionStore::new(config.chat.max_history_turns));
        let orchestrator = ConversationOrchestrator::new(
            store,
            provider,
            config.chat.clone(),
            GenerationParams {
                max_output_tokens: config.provider.max_output_tokens,
                temperature: config.provider.temperature,
            },
        );

        Ok(Self {
            orchestrator: Arc::new(orchestrator),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_rejects_missing_endpoint() {
        let config = AppConfig::default();
        let err = AppState::init(&config).unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }
}
