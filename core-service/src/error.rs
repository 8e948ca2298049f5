use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use core_library::LibraryError;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Error returned by every handler; rendered as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Path segment that cannot name a row
    #[error("Not found: '{0}' is not a valid id")]
    InvalidId(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::NOT_FOUND,
            ApiError::Library(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Library(LibraryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Library(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Storage errors carry the driver's own message.
    fn message(&self) -> String {
        match self {
            ApiError::Library(LibraryError::Database(e)) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
