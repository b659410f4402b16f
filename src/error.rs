//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service layer returns [`AppError`]. The
//! enum implements [`IntoResponse`], so handlers can bubble errors up with `?`
//! and get a consistent JSON error body:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "message": "Short code not found",
//!     "details": { "code": "abc123" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by the request handlers, services and repositories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed client input (bad URL, unreadable body, missing `Host`).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested short code does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Every generated candidate code collided with an existing one.
    #[error("Could not generate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// The store rejected a write because of a uniqueness constraint.
    ///
    /// The shorten flow converts this into a retry; it only reaches a client
    /// if some other write path lets it escape.
    #[error("Unique constraint violation")]
    ConstraintViolation { constraint: Option<String> },

    /// Opaque server-side failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ExhaustedRetries { .. }
            | AppError::ConstraintViolation { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Constraint violations are reported as plain internal errors, the
    /// constraint name stays in the logs.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::ExhaustedRetries { attempts } => ErrorInfo {
                code: "internal_error",
                message: "Could not generate a unique short code. Try again.".to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::ConstraintViolation { .. } => ErrorInfo {
                code: "internal_error",
                message: "Database error".to_string(),
                details: json!({}),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid request body",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }
}

/// Maps a database error onto the application taxonomy.
///
/// Unique violations become [`AppError::ConstraintViolation`]; anything else
/// is logged and hidden behind [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::ConstraintViolation {
            constraint: db.constraint().map(str::to_string),
        };
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
