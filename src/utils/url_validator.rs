//! Validation of user-supplied destination URLs.

use crate::error::AppError;
use axum::http::HeaderValue;
use serde_json::json;
use url::Url;

/// Checks that `raw` is an absolute `http`/`https` URL with a host.
///
/// Returns the input with surrounding whitespace trimmed. The string is not
/// otherwise rewritten: lookups by destination are exact-string matches, so
/// `https://a.com` and `https://a.com/` stay distinct.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL contains control characters,
/// does not parse, uses another scheme, or has no host.
pub fn validate_long_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    // The parser silently drops tabs and newlines, the stored string keeps them.
    if trimmed.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "URL must not contain control characters",
            json!({ "url": trimmed }),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "url": trimmed, "reason": e.to_string() }),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "URL scheme must be http or https",
            json!({ "url": trimmed, "scheme": parsed.scheme() }),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "URL must include a host",
            json!({ "url": trimmed }),
        ));
    }

    Ok(trimmed.to_string())
}

/// Returns the value to send in the `Location` header for a stored URL.
///
/// The stored string is used as is when it is a valid header value. Otherwise
/// (non-ASCII paths, for instance) the percent-encoded serialization of the
/// parsed URL is used.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored URL contains control
/// characters or cannot be turned into a header value at all.
pub fn redirect_location(long_url: &str) -> Result<String, AppError> {
    let unredirectable = || {
        tracing::error!(url = ?long_url, "Stored URL cannot be used as a redirect target");
        AppError::internal("Stored URL cannot be redirected to", json!({}))
    };

    // Re-parsing would strip these and redirect somewhere else.
    if long_url.chars().any(char::is_control) {
        return Err(unredirectable());
    }

    if HeaderValue::from_str(long_url).is_ok() {
        return Ok(long_url.to_string());
    }

    let parsed = Url::parse(long_url).map_err(|_| unredirectable())?;
    let location = parsed.to_string();

    if HeaderValue::from_str(&location).is_err() {
        return Err(unredirectable());
    }

    Ok(location)
}
