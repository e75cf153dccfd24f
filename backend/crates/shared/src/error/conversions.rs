//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from store errors to [`AppError`] and the
//! HTTP rendering of [`AppError`].

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23: Integrity Constraint Violation
                    Some("23000" | "23001" | "23503" | "23505") => {
                        AppError::conflict("Integrity constraint violation")
                    }
                    Some("23502") => AppError::unprocessable("Required field is null"),
                    Some("23514") => AppError::unprocessable("Check constraint violation"),
                    // Class 22: Data Exception (e.g. value too long, out of range)
                    Some("22001" | "22003") => AppError::unprocessable("Value out of range"),
                    // Class 53: Insufficient Resources
                    Some("53000" | "53100" | "53200" | "53300") => {
                        AppError::service_unavailable("Database resource exhausted")
                    }
                    // Class 57: Operator Intervention
                    Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Protocol(_) => {
                AppError::internal("Database protocol error").with_source(err)
            }
            sqlx::Error::Tls(_) => AppError::internal("Database TLS error").with_source(err),
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Error envelope: `{"success": false, "kind": ..., "detail": ..., "fields": [...]}`.
///
/// `fields` is omitted when there are no field violations.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({
            "success": false,
            "kind": self.kind(),
            "detail": self.message(),
        });
        if !self.fields().is_empty() {
            body["fields"] = serde_json::json!(self.fields());
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod sqlx_tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_row_not_found_maps_to_404() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_pool_timeout_maps_to_503() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_io_error_maps_to_503() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let app_err: AppError = sqlx::Error::Io(io).into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }
}

#[cfg(all(test, feature = "axum"))]
mod axum_tests {
    use super::*;
    use axum::response::IntoResponse;

    async fn body_json(err: AppError) -> (u16, serde_json::Value) {
        let response = err.into_response();
        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_json(AppError::not_found("User not found")).await;
        assert_eq!(status, 404);
        assert_eq!(body["success"], false);
        assert_eq!(body["kind"], "NOT_FOUND");
        assert_eq!(body["detail"], "User not found");
        assert!(body.get("fields").is_none());
    }

    #[tokio::test]
    async fn test_validation_envelope_lists_fields() {
        let err = AppError::unprocessable("Validation failed")
            .with_field("full_name", "must not be blank");
        let (status, body) = body_json(err).await;
        assert_eq!(status, 422);
        assert_eq!(body["fields"][0]["field"], "full_name");
        assert_eq!(body["fields"][0]["reason"], "must not be blank");
    }
}
