//! User Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::text::TextError;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// Fixed message for a missing record
pub const USER_NOT_FOUND: &str = "User not found";

/// User-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// No record with the requested id
    #[error("User not found")]
    NotFound,

    /// A field failed domain validation
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// JSON body missing, malformed, or of the wrong shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// JSON body that is not even syntactically JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Path or query parameter of the wrong type
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Build a validation error for a text field
    pub fn invalid_text(field: &'static str, err: TextError) -> Self {
        UserError::Validation {
            field,
            reason: err.to_string(),
        }
    }

    /// Get the ErrorKind for this error.
    ///
    /// Store errors report `InternalServerError` here; the rendered response
    /// refines them through the kernel `sqlx::Error` conversion.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound => ErrorKind::NotFound,
            UserError::Validation { .. }
            | UserError::InvalidBody(_)
            | UserError::InvalidParameter(_) => ErrorKind::UnprocessableEntity,
            UserError::MalformedJson(_) => ErrorKind::BadRequest,
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            UserError::NotFound => AppError::not_found(USER_NOT_FOUND),
            UserError::Validation { field, reason } => {
                AppError::unprocessable("Validation failed").with_field(field, reason)
            }
            err @ UserError::MalformedJson(_) => AppError::bad_request(err.to_string()),
            UserError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let app_err = self.into_app_error();

        // Level follows the rendered kind: a store error can still be a 409 or 422
        if app_err.kind().is_server_error() {
            tracing::error!(error = %error, kind = %app_err.kind(), "User request failed");
        } else {
            tracing::debug!(error = %error, kind = %app_err.kind(), "Rejected user request");
        }

        app_err.into_response()
    }
}

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => UserError::MalformedJson(e.body_text()),
            other => UserError::InvalidBody(other.body_text()),
        }
    }
}

impl From<PathRejection> for UserError {
    fn from(rejection: PathRejection) -> Self {
        UserError::InvalidParameter(rejection.body_text())
    }
}

impl From<QueryRejection> for UserError {
    fn from(rejection: QueryRejection) -> Self {
        UserError::InvalidParameter(rejection.body_text())
    }
}
