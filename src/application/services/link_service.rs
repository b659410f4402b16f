//! Short link creation, resolution and statistics.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved};
use crate::utils::url_validator::{redirect_location, validate_long_url};
use serde_json::json;

/// Number of candidate codes tried before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// A mapping that was just followed, with the target to redirect to.
#[derive(Debug, Clone)]
pub struct ResolvedLink {
    pub mapping: UrlMapping,
    /// `Location` header value, see [`redirect_location`].
    pub location: String,
}

/// Service implementing the shorten, redirect and stats operations.
///
/// Holds no state besides its collaborators; every call is an independent
/// unit of work against the repository.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Returns the mapping for `long_url`, creating it on first use.
    ///
    /// # Deduplication
    ///
    /// The first mapping stored for an exact URL string is canonical: a second
    /// call with the same string returns it unchanged, with no new row.
    ///
    /// # Code Generation
    ///
    /// Up to [`MAX_CODE_ATTEMPTS`] candidates are drawn. A candidate is spent
    /// when it is reserved, already taken, or loses an insert race against a
    /// concurrent request (unique constraint violation).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed; the store is
    /// not touched in that case.
    /// Returns [`AppError::ExhaustedRetries`] if every candidate collided.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        let long_url = validate_long_url(long_url)?;

        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            tracing::debug!(code = %existing.short_code, "Reusing existing mapping");
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();

            if is_reserved(&code) || self.repository.find_by_code(&code).await?.is_some() {
                tracing::debug!(attempt, %code, "Short code collision");
                continue;
            }

            match self
                .repository
                .insert(NewUrlMapping::new(code, long_url.clone()))
                .await
            {
                Ok(mapping) => {
                    tracing::info!(code = %mapping.short_code, "Created short link");
                    return Ok(mapping);
                }
                Err(AppError::ConstraintViolation { .. }) => {
                    tracing::debug!(attempt, "Short code taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            attempts = MAX_CODE_ATTEMPTS,
            "Failed to generate unique short code"
        );
        Err(AppError::ExhaustedRetries {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Looks up `code` and records one click on it.
    ///
    /// The redirect target is checked first, so a click is only counted for
    /// a mapping that can actually be redirected to. The counter update runs
    /// before returning and its errors propagate, so a redirect is only
    /// issued once the click is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] if the stored URL is not a usable
    /// redirect target, or on database errors.
    pub async fn resolve(&self, code: &str) -> Result<ResolvedLink, AppError> {
        let mut mapping = self.get_by_code(code).await?;
        let location = redirect_location(&mapping.long_url)?;

        if self.repository.increment_clicks(code).await? {
            mapping.clicks += 1;
        } else {
            tracing::warn!(%code, "Click not recorded, mapping disappeared");
        }

        Ok(ResolvedLink { mapping, location })
    }

    /// Returns the stored mapping for `code` without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<UrlMapping, AppError> {
        self.get_by_code(code).await
    }

    async fn get_by_code(&self, code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }
}
