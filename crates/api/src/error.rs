//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found
    NotFound(String),
    /// Request failed validation
    BadRequest(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: Some("bad_request".to_string()),
                },
            ),
            ApiError::Database(msg) => {
                error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database error".to_string(),
                        code: Some("database_error".to_string()),
                    },
                )
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: Some("internal_error".to_string()),
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<common::Error> for ApiError {
    fn from(e: common::Error) -> Self {
        match e {
            common::Error::NotFound(msg) => ApiError::NotFound(format!("{} not found", msg)),
            common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            common::Error::Database(msg) => ApiError::Database(msg),
            common::Error::Config(msg) | common::Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Extension trait to convert sqlx errors to ApiError
pub trait DbResultExt<T> {
    fn db_err(self) -> Result<T, ApiError>;
}

impl<T, E: std::fmt::Display> DbResultExt<T> for Result<T, E> {
    fn db_err(self) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::Database(e.to_string()))
    }
}

/// Extension trait to convert Option to NotFound
pub trait OptionExt<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::NotFound(resource.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_status() {
        let cases = [
            (common::Error::NotFound("Profile x".into()), StatusCode::NOT_FOUND),
            (common::Error::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (common::Error::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (common::Error::Config("oops".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_option_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.not_found("gone"), Err(ApiError::NotFound(_))));
        assert_eq!(Some(3).not_found("here").unwrap(), 3);
    }
}
