//! Server error types

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use users_core::StoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while starting the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error surfaced to HTTP clients.
///
/// The `Display` text becomes the `detail` field of the JSON error body, so
/// the not-found message must stay exactly "User not found".
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ApiError {
    /// Requested user id is absent from the store
    #[error("User not found")]
    #[diagnostic(code(users_server::not_found))]
    NotFound,

    /// Request failed validation
    #[error("Validation failed: {message}")]
    #[diagnostic(
        code(users_server::validation_error),
        help("Check that all required fields are present and well-formed")
    )]
    Validation { message: String },
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound { .. } => Self::NotFound,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
