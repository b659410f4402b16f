//! Top-level router combining routes and middleware.
//!
//! # Middleware
//!
//! - **CORS** - Permissive by default, see [`crate::api::middleware::cors`]
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - cross-origin policy, usually built by [`api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}
