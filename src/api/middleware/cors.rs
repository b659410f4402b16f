//! Cross-origin resource sharing policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds the CORS layer.
///
/// With no allowed origins configured the policy is fully permissive: any
/// origin, method and header, with credentials. A literal `*` cannot be
/// combined with credentials, so origin, method and headers are mirrored
/// from the request instead.
///
/// A non-empty `allowed_origins` restricts the origin to that list; methods
/// and headers stay mirrored. Entries that are not valid header values are
/// skipped with a warning.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
