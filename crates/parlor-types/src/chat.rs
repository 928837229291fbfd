//! Chat turn and response types for Parlor.
//!
//! A conversation is an ordered sequence of turns keyed by an opaque,
//! caller-supplied session id. Turns are immutable once created; insertion
//! order is chronological order and is never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from the llm module (turns and prompts share it).
pub use crate::llm::MessageRole;

/// A single turn within a conversation.
///
/// Immutable once created. Only `User` and `Assistant` turns are stored;
/// the system preamble is injected at prompt assembly time and never
/// persisted as a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a user turn stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant turn stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Response returned to the caller after a completed exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub message: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Metadata attached to a chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Total tokens consumed by the completion call, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    /// Confidence score of the response, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A page of conversation history.
///
/// `messages` holds at most the requested number of most-recent turns,
/// oldest-first; `total_count` is the total retained (post-eviction) count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryPage {
    pub session_id: String,
    pub messages: Vec<ChatTurn>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = ChatTurn::user("hello");
        assert_eq!(user.role, MessageRole::User);
        assert_eq!(user.content, "hello");

        let assistant = ChatTurn::assistant("hi there");
        assert_eq!(assistant.role, MessageRole::Assistant);
    }

    #[test]
    fn test_chat_response_serialize_skips_empty_metadata() {
        let resp = ChatResponse {
            message: "hi".to_string(),
            session_id: "s1".to_string(),
            timestamp: Utc::now(),
            metadata: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn test_chat_response_serialize_with_tokens() {
        let resp = ChatResponse {
            message: "hi".to_string(),
            session_id: "s1".to_string(),
            timestamp: Utc::now(),
            metadata: Some(ResponseMetadata {
                tokens_used: Some(42),
                confidence: None,
            }),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"tokens_used\":42"));
        assert!(!json.contains("confidence"));
    }

    #[test]
    fn test_history_page_roundtrip() {
        let page = ChatHistoryPage {
            session_id: "s1".to_string(),
            messages: vec![ChatTurn::user("hello")],
            total_count: 7,
        };
        let json = serde_json::to_string(&page).unwrap();
        let parsed: ChatHistoryPage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_count, 7);
        assert_eq!(parsed.messages.len(), 1);
    }
}
