use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matcher::MatchError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Body returned to clients for a rejected match request.
pub const INVALID_RGB_MESSAGE: &str = "Invalid RGB values provided";

/// Body returned to clients for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error during foundation matching";

/// Body returned when the request exceeds `max_body_size_kb`.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Body returned when a request runs past `timeout_secs`.
pub const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Request timed out")]
    Timeout,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    /// Client-facing message. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServerError::InvalidInput(_) => INVALID_RGB_MESSAGE,
            ServerError::Internal(_) => INTERNAL_ERROR_MESSAGE,
            ServerError::NotFound => "Not found",
            ServerError::MethodNotAllowed => "Method not allowed",
            ServerError::PayloadTooLarge { .. } => PAYLOAD_TOO_LARGE_MESSAGE,
            ServerError::Timeout => TIMEOUT_MESSAGE,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Internal(detail) => {
                tracing::error!(error = %detail, "Foundation matching error")
            }
            ServerError::InvalidInput(detail) => {
                tracing::debug!(error = %detail, "Rejected match request")
            }
            ServerError::PayloadTooLarge { limit } => {
                tracing::warn!(limit, "Rejected oversized request body")
            }
            ServerError::Timeout => tracing::warn!("Request timed out"),
            ServerError::NotFound | ServerError::MethodNotAllowed => {}
        }

        let body = Json(ErrorResponse {
            error: self.public_message().to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<MatchError> for ServerError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidInput(msg) => ServerError::InvalidInput(msg),
            MatchError::Internal(msg) => ServerError::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(format!("JSON serialization error: {err}"))
    }
}
