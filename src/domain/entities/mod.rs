//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code and its destination
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
