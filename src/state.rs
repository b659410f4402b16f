//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Handler dependencies, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
    /// Public origin for short URLs. When `None` the request's own origin is used.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteUrlRepository>>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
