//! Helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Destination URL validation
//! - [`base_url`] - Public origin resolution for short URLs

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
