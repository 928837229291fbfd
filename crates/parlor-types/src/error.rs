use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by the conversation core.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Caller error: empty message or session id. No state was mutated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external completion call failed (provider error, timeout, or
    /// cancellation). No assistant turn was recorded; the user turn that
    /// preceded the call remains in history.
    #[error("completion failed: {0}")]
    CompletionFailed(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ChatError::InvalidInput("message cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid input: message cannot be empty");
    }

    #[test]
    fn test_completion_failed_wraps_llm_error() {
        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert!(matches!(err, ChatError::CompletionFailed(_)));
        assert!(err.to_string().contains("authentication failed"));
    }
}
