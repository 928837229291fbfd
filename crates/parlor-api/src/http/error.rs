//! Application error type mapping to HTTP status codes.
//!
//! Completion failures map to a generic 500 body; the specific provider
//! cause is logged server-side, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use parlor_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Error surfaced by the conversation core.
    Chat(ChatError),
    /// Request validation error caught at the boundary.
    Validation(String),
    /// The requested session has no retained messages.
    NotFound(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Chat(ChatError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, "InvalidRequest", msg)
            }
            AppError::Chat(ChatError::CompletionFailed(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "An error occurred while processing your request".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "InvalidRequest", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg),
        };

        let body = ErrorBody {
            error: error.to_string(),
            message,
            timestamp: Utc::now(),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_types::llm::LlmError;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err: AppError = ChatError::InvalidInput("message cannot be empty".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_completion_failure_maps_to_500_without_cause() {
        let err: AppError = ChatError::CompletionFailed(LlmError::Provider {
            message: "secret internal detail".to_string(),
        })
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Session s1 not found".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
