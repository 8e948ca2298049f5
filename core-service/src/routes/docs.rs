//! Welcome message and API documentation
//!
//! The OpenAPI document is compiled into the binary, so the server needs no
//! static directory at runtime.

use super::Message;
use crate::state::AppState;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

pub const OPENAPI_JSON: &str = include_str!("../../static/openapi.json");
const DOCS_HTML: &str = include_str!("../../static/docs.html");

pub const WELCOME: &str = "Welcome to the Music Store API";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/static/openapi.json", get(openapi))
        .route("/docs", get(docs))
}

async fn home() -> Json<Message> {
    Json(Message::new(WELCOME))
}

async fn openapi() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_JSON)
}

async fn docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}
