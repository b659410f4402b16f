//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service endpoints. None require authentication.
///
/// # Endpoints
///
/// - `GET  /health`        - Liveness probe
/// - `POST /shorten`       - Create or reuse a short code
/// - `GET  /stats/{code}`  - Click statistics for a code
/// - `GET  /{code}`        - Redirect to the stored URL
///
/// Static segments take priority over `/{code}`, which is why codes such as
/// `health` are never generated.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
