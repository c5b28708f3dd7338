//! API error types with IntoResponse
//!
//! Errors are converted to plain-text responses with appropriate status codes.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;
use crate::models::{TodoId, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request parameter (400)
    Validation(ValidationError),

    /// No todo with this id (404)
    NotFound { id: TodoId },

    /// Store failure during a request (500, logged)
    Store(StoreError),

    /// Request body rejected while reading it (e.g. 413 over the body limit)
    Rejected { status: StatusCode, message: String },

    /// Method not supported on this path (405)
    MethodNotAllowed,

    /// Internal error, e.g. page rendering (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { id } => (StatusCode::NOT_FOUND, format!("todo {} not found", id)),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::Rejected { status, message } => (status, message),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        Self::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        Self::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            _ => Self::Store(e),
        }
    }
}
