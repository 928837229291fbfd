//! Health and readiness handlers.
//!
//! Endpoints:
//! - GET /health        - Liveness check
//! - GET /health/ready  - Readiness check including downstream services

use std::collections::BTreeMap;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

fn healthy(services: BTreeMap<String, String>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        services,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health - Liveness check.
pub async fn get_health() -> Json<HealthResponse> {
    let mut services = BTreeMap::new();
    services.insert("api".to_string(), "healthy".to_string());
    healthy(services)
}

/// GET /health/ready - Readiness check.
///
/// The completion provider is only exercised lazily per request, so
/// readiness reports it as healthy once the service has started with a
/// valid configuration.
pub async fn get_readiness() -> Json<HealthResponse> {
    let mut services = BTreeMap::new();
    services.insert("api".to_string(), "healthy".to_string());
    services.insert("completion_provider".to_string(), "healthy".to_string());
    healthy(services)
}
