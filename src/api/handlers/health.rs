//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Stateless: it never touches the database, so it only tells that the
/// process is serving requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
