use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::database::StoreError;
use crate::validate::ValidationError;

/// HTTP API error with appropriate status codes and client-facing bodies.
///
/// Validation and not-found are handled where they arise; storage errors
/// bubble up through `?` and render as a generic 500 so backend details
/// never leak to clients.
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized,

    // 400 Bad Request
    Validation(ValidationError),

    // 404 Not Found
    NotFound,

    // 500 Internal Server Error
    Internal(StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Unauthorized => json!({ "error": "Unauthorized request" }),
            ApiError::Validation(err) => json!({ "error": { "message": err.to_string() } }),
            ApiError::NotFound => json!({ "error": { "message": "Bookmark Not Found" } }),
            ApiError::Internal(_) => json!({ "error": { "message": "Internal server error" } }),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized request"),
            ApiError::Validation(err) => write!(f, "{}", err),
            ApiError::NotFound => write!(f, "Bookmark Not Found"),
            ApiError::Internal(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            // Log the real failure; the client only sees a generic 500
            tracing::error!("storage failure: {}", err);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
