//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! - [`services::link_service::LinkService`] - Shorten, resolve and stats lookups

pub mod services;
