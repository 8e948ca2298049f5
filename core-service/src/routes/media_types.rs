use super::found;
use crate::error::Result;
use crate::extract::Id;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::MediaType;

/// Read-only; media types are created by the seeder.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_media_types))
        .route("/:id", get(get_media_type))
}

async fn list_media_types(State(state): State<AppState>) -> Result<Json<Vec<MediaType>>> {
    Ok(Json(state.media_types.list(state.list_limit).await?))
}

async fn get_media_type(
    State(state): State<AppState>,
    Id(id): Id,
) -> Result<Json<MediaType>> {
    found("MediaType", id, state.media_types.find_by_id(id).await?)
}
