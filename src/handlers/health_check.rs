//! # Health Check Handler
//!
//! Liveness endpoint for load balancers and deployment tooling.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Health check endpoint.
///
/// GET /api/healthz
///
/// Performs no store access, so it answers `{"ok": true}` even while the
/// database is unreachable.
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse { ok: true })
}
