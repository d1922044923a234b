use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::pagination::PaginationError;

/// API error type with HTTP status code and message
///
/// Not-found and internal errors serialize as
/// `{"error": {"status": <code>, "message": <message>}}`; parameter
/// validation failures use the flat `{"err": <message>, "status": false}`
/// shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    validation: bool,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            validation: false,
        }
    }

    /// Creates a 400 Bad Request error for a failed parameter validation
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            validation: true,
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.validation {
            Json(json!({
                "err": self.message,
                "status": false
            }))
        } else {
            Json(json!({
                "error": {
                    "status": self.status.as_u16(),
                    "message": self.message
                }
            }))
        };

        (self.status, body).into_response()
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::internal_server_error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_404() {
        let err = ApiError::not_found("Product not found: 99");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(!err.validation);
    }

    #[test]
    fn validation_carries_400() {
        let err = ApiError::validation("The page parameter must be an integer");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.validation);
    }

    #[test]
    fn pagination_error_converts_to_validation() {
        let err: ApiError = PaginationError::NotAnInteger("limit").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "The limit parameter must be an integer");
        assert!(err.validation);
    }

    #[test]
    fn string_converts_to_internal_error() {
        let err: ApiError = "boom".to_string().into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
