//! HTTP middleware for cross-origin handling and observability.

pub mod cors;
pub mod tracing;
