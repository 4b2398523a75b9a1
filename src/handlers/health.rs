//! Health check endpoints.
//!
//! Provides a liveness endpoint for monitoring. The relay holds no
//! connections or storage of its own, so there is nothing deeper to probe.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status
    pub status: &'static str,
    /// Server version
    pub version: &'static str,
}

/// Liveness probe - server is running
///
/// GET /health/live
async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/live", get(liveness))
}
