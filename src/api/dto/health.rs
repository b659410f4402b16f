//! DTO for the health check endpoint.

use serde::Serialize;

/// Liveness response. Always `{"status":"ok"}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
