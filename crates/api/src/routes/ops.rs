//! Operations routes
//!
//! Health check endpoint for monitoring. No auth, no state beyond the
//! clock.

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status, always "ok" while the process is serving
    pub status: &'static str,
    /// Current server time, RFC 3339
    pub timestamp: String,
}

/// Health check
///
/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
