//! Axum router configuration with middleware.
//!
//! Chat routes live under `/api/`; health endpoints are top-level.
//! Middleware: CORS (allow-all, for web and Teams clients) and tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat/message", post(handlers::chat::send_message))
        .route(
            "/chat/sessions/{session_id}/history",
            get(handlers::chat::get_history),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::get_health))
        .route("/health/ready", get(handlers::health::get_readiness))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
