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
    Validation(String),
    /// Language model call failed
    Upstream(String),
    /// No language model configured
    AiUnavailable,
    /// Internal server error
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, code) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "not_found"),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg, "validation_error")
            }
            ApiError::Upstream(msg) => {
                error!("Upstream error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "AI request failed".to_string(),
                    "upstream_error",
                )
            }
            ApiError::AiUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI features are not configured".to_string(),
                "ai_unavailable",
            ),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "internal_error",
                )
            }
        };

        let body = ErrorResponse {
            error,
            code: Some(code.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

impl From<common::Error> for ApiError {
    fn from(e: common::Error) -> Self {
        match e {
            common::Error::NotFound(msg) => ApiError::NotFound(msg),
            common::Error::Validation(msg) => ApiError::Validation(msg),
            common::Error::ExternalCall(msg) => ApiError::Upstream(msg),
            common::Error::Config(_) => ApiError::AiUnavailable,
            common::Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ai::AiError> for ApiError {
    fn from(e: ai::AiError) -> Self {
        common::Error::from(e).into()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Extension trait to convert Option to NotFound
pub trait OptionExt<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::NotFound(resource.into()))
    }
}
