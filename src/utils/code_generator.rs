//! Short code generation.
//!
//! Codes are drawn from the 62-character alphabet `a-z`, `A-Z`, `0-9`.
//! A generator only proposes candidates; uniqueness is checked by the caller.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes that are never handed out.
///
/// `GET /health` is routed before `GET /{code}`, and `GET /shorten` answers
/// 405 because that path only accepts `POST`, so mappings with those codes
/// could never be reached. `GET /stats` itself
/// would still resolve through `/{code}`, but a `stats` link next to
/// `/stats/{code}` would be confusing, so it is kept out as well.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "stats"];

/// Source of candidate short codes.
///
/// Injected into [`crate::application::services::LinkService`] so tests can
/// supply deterministic sequences.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code.
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local RNG of the `rand` crate.
///
/// Each character is drawn independently and uniformly. The underlying
/// generator is a CSPRNG, so codes are not trivially predictable.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Returns true if `code` is reserved for a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
