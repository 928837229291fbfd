//! Chat HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat/message                         - Send a message, get the reply
//! - GET  /api/chat/sessions/{session_id}/history   - Page of session history

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use parlor_types::chat::{ChatHistoryPage, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the send-message endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message to the chatbot.
    pub message: String,
    /// Opaque session identifier, chosen by the caller.
    pub session_id: String,
    /// Optional caller context, recorded for tracing only.
    #[serde(default)]
    pub context: Option<ChatContext>,
}

/// Caller-supplied context information.
#[derive(Debug, Deserialize)]
pub struct ChatContext {
    pub user_id: Option<String>,
    /// Type of client application (web, teams, mobile).
    pub client_type: Option<String>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// POST /api/chat/message - Send a message and return the assistant reply.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }
    if body.session_id.trim().is_empty() {
        return Err(AppError::Validation("SessionId is required".to_string()));
    }

    let request_id = Uuid::now_v7().to_string();
    let client_type = body
        .context
        .as_ref()
        .and_then(|c| c.client_type.as_deref())
        .unwrap_or("unknown");
    let span = tracing::info_span!(
        "send_message",
        request_id = %request_id,
        session_id = %body.session_id,
        client_type,
    );

    // The HTTP layer never cancels the token itself; a client disconnect
    // drops this future and aborts the outbound call with it.
    let cancel = CancellationToken::new();
    let response = state
        .orchestrator
        .respond(&body.session_id, &body.message, cancel)
        .instrument(span)
        .await?;

    Ok(Json(response))
}

/// GET /api/chat/sessions/{session_id}/history - Page of session history.
///
/// A session with zero retained messages is reported as 404; the core treats
/// it as an empty page, the boundary interprets that as "not found".
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ChatHistoryPage>, AppError> {
    if query.limit < 1 || query.limit > 100 {
        return Err(AppError::Validation(
            "Limit must be between 1 and 100".to_string(),
        ));
    }

    let page = state.orchestrator.history_page(&session_id, query.limit);
    if page.messages.is_empty() {
        return Err(AppError::NotFound(format!(
            "Session {session_id} not found"
        )));
    }

    Ok(Json(page))
}
