//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the mapping by code
/// 2. Check the stored URL is a usable `Location` value
/// 3. Increment its click counter
/// 4. Return 307 Temporary Redirect, which keeps the request method
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the stored URL cannot be redirected
/// to or the click cannot be recorded.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let resolved = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&resolved.location))
}
