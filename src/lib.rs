//! # linkcut
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Shorten, redirect and stats logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET  /health` - Liveness probe
//! - `POST /shorten` - Shorten a URL (idempotent per exact URL string)
//! - `GET  /{code}` - 307 redirect, counts a click
//! - `GET  /stats/{code}` - Click count and creation time
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PATH="./urls.db"   # optional
//! export PORT=8000             # optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
