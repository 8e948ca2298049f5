//! HTTP handlers, one module per resource
//!
//! Every handler follows the same shape: unpack the request, make one
//! repository call, and map the outcome to JSON. Errors flow through
//! [`ApiError`](crate::error::ApiError), which picks the status code.

pub mod albums;
pub mod artists;
pub mod docs;
pub mod genres;
pub mod media_types;
pub mod playlists;
pub mod tracks;

use crate::error::{ApiError, Result};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use core_library::LibraryError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Body of informational responses such as deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turn a repository lookup into a response or a 404.
pub(crate) fn found<T>(entity: &str, id: i64, value: Option<T>) -> Result<Json<T>> {
    value
        .map(Json)
        .ok_or_else(|| ApiError::from(LibraryError::not_found(entity, id)))
}

/// Turn a repository delete outcome into a response or a 404.
pub(crate) fn deleted(entity: &str, id: i64, removed: bool) -> Result<Json<Message>> {
    if removed {
        Ok(Json(Message::new(format!("{} {} deleted", entity, id))))
    } else {
        Err(LibraryError::not_found(entity, id).into())
    }
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
