//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::HealthResponse;

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /healthz`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
