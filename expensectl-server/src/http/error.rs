//! API error types with IntoResponse
//!
//! Every error body has the shape `{"message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::service::ServiceError;

/// Fixed message for every validation failure; field detail stays in the logs.
pub const BAD_BODY_MESSAGE: &str = "bad body request";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed required-field checks (400)
    Validation(ValidationError),

    /// Store failure (500). The message is passed through unsanitized.
    Storage { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(e) => {
                tracing::debug!(field = e.field(), "rejected expense body: {}", e);
                (StatusCode::BAD_REQUEST, BAD_BODY_MESSAGE.to_string())
            }
            Self::Storage { message } => {
                tracing::error!("Storage error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(e) => Self::Validation(e),
            ServiceError::Storage(e) => Self::Storage {
                message: e.to_string(),
            },
        }
    }
}
