//! SQLite persistence.
//!
//! - [`schema`] - Pool setup and idempotent schema initialization
//! - [`SqliteUrlRepository`] - Storage for URL mappings

pub mod schema;
pub mod sqlite_url_repository;

pub use schema::{connect, init_schema};
pub use sqlite_url_repository::SqliteUrlRepository;
