//! Public base origin resolution for generated short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the origin that short URLs are built on.
///
/// A configured base URL wins. Otherwise the origin is taken from the request:
/// the scheme from `X-Forwarded-Proto` (falling back to `http`) and the
/// authority from the `Host` header, port included.
///
/// The result never ends with `/`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8000".parse().unwrap());
///
/// let origin = resolve_base_url(None, &headers).unwrap();
/// assert_eq!(origin, "http://localhost:8000");
/// ```
pub fn resolve_base_url(
    configured: Option<&str>,
    headers: &HeaderMap,
) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        // Proxies may append a list: "https, http"
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("http") || v.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host.trim_end_matches('/')))
}

/// Joins a base origin and a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
