//! Health check response shape.

use serde::Serialize;

/// Response body for `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}
