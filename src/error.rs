//! Error taxonomy and its HTTP mapping.
//!
//! Internally every failure carries a tagged variant so logs can tell a DNS
//! timeout from an empty answer, or a unique-constraint race from a dropped
//! connection. Clients only ever see three bodies:
//!
//! | Variant                | Status | Body                                   |
//! |------------------------|--------|----------------------------------------|
//! | [`AppError::InvalidUrl`] | 200  | `{"error": "invalid URL"}`             |
//! | [`AppError::NotFound`]   | 200  | `{"error": "no matching URL"}`         |
//! | [`AppError::Store`]      | 500  | `{"error": "internal server error"}`   |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// User-facing message for a URL whose host does not resolve.
pub const INVALID_URL_MESSAGE: &str = "invalid URL";
/// User-facing message for an unknown short code.
pub const NOT_FOUND_MESSAGE: &str = "no matching URL";
/// User-facing message for any storage failure.
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Why a submitted URL was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("url has no hostname")]
    Empty,
    #[error("hostname `{0}` resolved to no address")]
    NoAddress(String),
    #[error("lookup of `{host}` failed: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("lookup of `{host}` timed out after {seconds}s")]
    Timeout { host: String, seconds: u64 },
}

/// Failures reported by a [`crate::domain::repositories::ShortLinkRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Another writer claimed the short code between count and insert.
    #[error("short code {0} is already assigned")]
    CodeTaken(i64),
    /// Another writer inserted the same original URL between lookup and insert.
    #[error("original url is already shortened")]
    DuplicateUrl,
    #[error("gave up assigning a short code after {0} attempts")]
    Exhausted(usize),
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] ValidationError),
    #[error("no matching URL for `{0}`")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Store(StoreError::Database(e))
    }
}

/// JSON body returned for every error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl AppError {
    /// Status code and client-visible message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidUrl(_) => (StatusCode::OK, INVALID_URL_MESSAGE),
            AppError::NotFound(_) => (StatusCode::OK, NOT_FOUND_MESSAGE),
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Store(e) => tracing::error!(error = %e, "Request failed on store access"),
            AppError::InvalidUrl(e) => tracing::debug!(reason = %e, "Rejected URL"),
            AppError::NotFound(code) => tracing::debug!(code = %code, "No matching URL"),
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_url_keeps_ok_status() {
        let (status, body) =
            body_json(AppError::InvalidUrl(ValidationError::NoAddress("x".into()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "error": "invalid URL" }));
    }

    #[tokio::test]
    async fn test_lookup_failure_reads_as_invalid_url() {
        let err = ValidationError::Lookup {
            host: "example.invalid".into(),
            source: std::io::Error::other("nxdomain"),
        };
        let (status, body) = body_json(err.into()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "invalid URL");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(AppError::NotFound("99".into())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "error": "no matching URL" }));
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let (status, body) = body_json(StoreError::Exhausted(5).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }

    #[test]
    fn test_sqlx_error_maps_to_store() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Store(StoreError::Database(_))));
    }
}
