//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_url};

/// Creates (or reuses) a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/aB3dE9",
///   "short_code": "aB3dE9",
///   "long_url": "https://example.com/a/b"
/// }
/// ```
///
/// Shortening the same URL string again returns the same code.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body or the URL is invalid.
/// Returns 500 Internal Server Error if no unique code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let base = resolve_base_url(state.base_url.as_deref(), &headers)?;

    let mapping = state.link_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: short_url(&base, &mapping.short_code),
        short_code: mapping.short_code,
        long_url: mapping.long_url,
    }))
}
