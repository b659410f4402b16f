//! Repository trait for URL mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for the `urls` table.
///
/// Lookups match strings exactly: no case folding, no trailing-slash or
/// query-order normalization.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the first mapping, by insertion order, whose `long_url` equals
    /// `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts a new mapping with `clicks = 0` and a store-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if the short code already exists.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// Returns `Ok(false)` when no mapping has that code; a missing row is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums the click counters of all mappings.
    async fn total_clicks(&self) -> Result<i64, AppError>;
}
