//! Request extractors that reject with [`ApiError`]
//!
//! [`Payload`] is a lenient JSON body extractor. Request bodies are
//! optional: an empty body or a literal `null` unpacks to the input type's
//! `Default` (all fields absent), so the presence checks in
//! `core_library::models` report the missing fields instead of the request
//! failing as malformed. Any other body must be a JSON object. The
//! `Content-Type` header is not checked.
//!
//! [`Id`] reads the `:id` path segment. Only unsigned decimal integers name
//! a row; anything else is answered with a 404 like a missing row.

use crate::error::{ApiError, Result};
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extractor for `*Input` payloads.
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        parse_body(&bytes).map(Payload)
    }
}

/// Decode a request body, treating empty and `null` bodies as `{}`.
///
/// Arrays and scalars are rejected even when the input type could be
/// deserialized from them.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) => Ok(T::default()),
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
        }
        Ok(_) => Err(ApiError::InvalidBody("expected a JSON object".to_string())),
        Err(e) => Err(ApiError::InvalidBody(e.to_string())),
    }
}

/// Row id from the `:id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidId(e.body_text()))?;

        parse_id(&raw)
    }
}

/// Parse a path segment the way an `<int:id>` route converter would.
pub fn parse_id(raw: &str) -> Result<Id> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId(raw.to_string()));
    }

    raw.parse::<i64>()
        .map(Id)
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
