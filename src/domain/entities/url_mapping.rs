//! URL mapping entity.

use chrono::{DateTime, Utc};

/// Stored association between a short code and its destination URL.
///
/// `short_code` and `created_at` never change after insertion; `clicks` only
/// grows.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The store assigns `id`, `clicks` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub long_url: String,
}

impl NewUrlMapping {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
