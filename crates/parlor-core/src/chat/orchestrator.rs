//! Conversation orchestrator: one inbound user message in, one assistant
//! response out, with history maintained in the [`SessionStore`].
//!
//! # Concurrency policy
//!
//! Store mutations serialize per session inside the store, but the provider
//! call is made outside any lock. Two concurrent [`respond`] calls for the
//! same session may therefore both window the same pre-call history and race
//! to append their assistant turns. This is a deliberate trade: histories
//! stay ordered and bounded either way, and holding a session lock across a
//! network call would let one slow completion block every other request for
//! that session.
//!
//! [`respond`]: ConversationOrchestrator::respond

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use parlor_types::chat::{ChatHistoryPage, ChatResponse, ChatTurn, ResponseMetadata};
use parlor_types::config::ChatSettings;
use parlor_types::error::ChatError;
use parlor_types::llm::{CompletionRequest, LlmError};

use crate::chat::context::build_prompt;
use crate::llm::CompletionProvider;
use crate::session::SessionStore;

/// Largest page size `history_page` will serve, applied even when the HTTP
/// layer has already validated the limit.
const MAX_PAGE_LIMIT: usize = 100;

/// Generation parameters forwarded to the completion provider on every call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// Turns a single inbound user message into an assistant response.
///
/// Generic over the completion provider so the conversation logic stays
/// independent of any concrete HTTP client (and testable with a mock).
pub struct ConversationOrchestrator<P: CompletionProvider> {
    store: Arc<SessionStore>,
    provider: P,
    settings: ChatSettings,
    generation: GenerationParams,
}

impl<P: CompletionProvider> ConversationOrchestrator<P> {
    pub fn new(
        store: Arc<SessionStore>,
        provider: P,
        settings: ChatSettings,
        generation: GenerationParams,
    ) -> Self {
        Self {
            store,
            provider,
            settings,
            generation,
        }
    }

    /// Access the underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Process one user message for a session.
    ///
    /// The user turn is appended to the store before the history is read
    /// back, so the new turn deterministically participates in windowing.
    /// On provider failure the user turn is NOT rolled back; a retried
    /// request sees it as prior context. Cancellation is advisory for the
    /// outbound call only: once a completion has been received, the
    /// assistant turn is always appended.
    pub async fn respond(
        &self,
        session_id: &str,
        user_message: &str,
        cancel: CancellationToken,
    ) -> Result<ChatResponse, ChatError> {
        if session_id.trim().is_empty() {
            return Err(ChatError::InvalidInput("session id is required".to_string()));
        }
        if user_message.trim().is_empty() {
            return Err(ChatError::InvalidInput("message cannot be empty".to_string()));
        }

        self.store.append_turn(session_id, ChatTurn::user(user_message));
        let history = self.store.get_history(session_id);
        let messages = build_prompt(&history, self.settings.max_context_messages);

        let request = CompletionRequest {
            messages,
            max_output_tokens: self.generation.max_output_tokens,
            temperature: self.generation.temperature,
        };

        let started = Instant::now();
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LlmError::Cancelled),
            result = self.provider.complete(&request) => result,
        };

        match result {
            Ok(completion) => {
                self.store
                    .append_turn(session_id, ChatTurn::assistant(completion.text.as_str()));
                info!(
                    session_id,
                    provider = self.provider.name(),
                    tokens_used = completion.total_tokens_used,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "chat completion succeeded"
                );
                Ok(ChatResponse {
                    message: completion.text,
                    session_id: session_id.to_string(),
                    timestamp: Utc::now(),
                    metadata: Some(ResponseMetadata {
                        tokens_used: Some(completion.total_tokens_used),
                        confidence: None,
                    }),
                })
            }
            Err(err) => {
                // The specific cause stays in the logs; the caller sees a
                // generic completion failure.
                error!(
                    session_id,
                    provider = self.provider.name(),
                    error = %err,
                    "chat completion failed"
                );
                Err(ChatError::CompletionFailed(err))
            }
        }
    }

    /// Return at most the last `limit` turns plus the total retained count.
    ///
    /// `limit` is clamped to 1..=100. An unseen session yields an empty page
    /// with `total_count` 0; interpreting that as "not found" is left to the
    /// caller.
    pub fn history_page(&self, session_id: &str, limit: usize) -> ChatHistoryPage {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let history = self.store.get_history(session_id);
        let total_count = history.len();
        let start = total_count.saturating_sub(limit);
        ChatHistoryPage {
            session_id: session_id.to_string(),
            messages: history[start..].to_vec(),
            total_count,
        }
    }
}
