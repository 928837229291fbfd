//! Bounded prompt construction.
//!
//! Every outbound completion request carries the fixed system preamble
//! followed by a window over the stored history: the last
//! `max_context_messages` turns, oldest-first. Turns outside the window are
//! dropped from the prompt only; they remain in the store and may re-enter
//! future windows after evictions shift the sequence.

use parlor_types::chat::ChatTurn;
use parlor_types::llm::{Message, MessageRole};

/// Fixed system preamble sent with every completion request.
pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant that answers questions \
    about a SaaS application. Provide clear, accurate, and helpful responses based on \
    the documentation you have been trained on.";

/// Build the outbound prompt from stored history.
///
/// Returns the preamble plus exactly `min(history.len(), max_context_messages)`
/// historical turns in their stored (oldest-first) order.
pub fn build_prompt(history: &[ChatTurn], max_context_messages: usize) -> Vec<Message> {
    let start = history.len().saturating_sub(max_context_messages);
    let window = &history[start..];

    let mut messages = Vec::with_capacity(window.len() + 1);
    messages.push(Message {
        role: MessageRole::System,
        content: SYSTEM_PREAMBLE.to_string(),
    });
    for turn in window {
        messages.push(Message {
            role: turn.role.clone(),
            content: turn.content.clone(),
        });
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<ChatTurn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("u{i}"))
                } else {
                    ChatTurn::assistant(format!("a{i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_prompt_starts_with_preamble() {
        let prompt = build_prompt(&history(3), 10);
        assert_eq!(prompt[0].role, MessageRole::System);
        assert_eq!(prompt[0].content, SYSTEM_PREAMBLE);
    }

    #[test]
    fn test_short_history_included_whole() {
        let prompt = build_prompt(&history(4), 10);
        assert_eq!(prompt.len(), 5);
        assert_eq!(prompt[1].content, "u0");
        assert_eq!(prompt[4].content, "a3");
    }

    #[test]
    fn test_long_history_windows_to_last_n() {
        let prompt = build_prompt(&history(25), 10);
        // Preamble + exactly the window.
        assert_eq!(prompt.len(), 11);
        // Oldest turn in the window is turn 15; newest is turn 24.
        assert_eq!(prompt[1].content, "a15");
        assert_eq!(prompt[10].content, "u24");
    }

    #[test]
    fn test_window_is_oldest_first() {
        let prompt = build_prompt(&history(25), 3);
        let contents: Vec<_> = prompt[1..].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["u22", "a23", "u24"]);
    }

    #[test]
    fn test_empty_history_is_preamble_only() {
        let prompt = build_prompt(&[], 10);
        assert_eq!(prompt.len(), 1);
        assert_eq!(prompt[0].role, MessageRole::System);
    }
}
