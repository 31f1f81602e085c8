use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error type for the in-memory todo controller
///
/// Every variant maps to a client error status and is rendered as a JSON
/// `ErrorResponse`, so controller operations can use `?` and still hand a
/// complete response back to the route table.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter is not a UUID
    InvalidUuid(String),
    /// No todo with this id
    TodoNotFound(Uuid),
    /// Request body is not valid JSON for the expected shape
    JsonError(serde_json::Error),
    /// Request body parsed but a field value is rejected
    InvalidField(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidUuid(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid UUID format: expected format like '550e8400-e29b-41d4-a716-446655440000', got '{}'", id),
            ),
            ApiError::TodoNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Todo not found: {}", id),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", err),
            ),
            ApiError::InvalidField(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid field: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
