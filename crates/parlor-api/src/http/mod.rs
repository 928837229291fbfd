//! HTTP/REST API layer for Parlor.
//!
//! Axum-based API under `/api/` plus `/health` endpoints, with CORS and
//! request tracing middleware.

pub mod error;
pub mod handlers;
pub mod router;
