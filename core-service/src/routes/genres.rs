use super::{deleted, found, Message};
use crate::error::Result;
use crate::extract::{Id, Payload};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::{Genre, GenreInput};
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_genres).post(create_genre))
        .route("/:id", get(get_genre).put(update_genre).delete(delete_genre))
}

async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>> {
    Ok(Json(state.genres.list(state.list_limit).await?))
}

async fn get_genre(State(state): State<AppState>, Id(id): Id) -> Result<Json<Genre>> {
    found("Genre", id, state.genres.find_by_id(id).await?)
}

async fn create_genre(
    State(state): State<AppState>,
    Payload(input): Payload<GenreInput>,
) -> Result<(StatusCode, Json<Genre>)> {
    let genre = state.genres.insert(&input.into_new()?).await?;
    info!(genre_id = genre.genre_id, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

async fn update_genre(
    State(state): State<AppState>,
    Id(id): Id,
    Payload(input): Payload<GenreInput>,
) -> Result<Json<Genre>> {
    Ok(Json(state.genres.update(id, &input.into_new()?).await?))
}

async fn delete_genre(State(state): State<AppState>, Id(id): Id) -> Result<Json<Message>> {
    deleted("Genre", id, state.genres.delete(id).await?)
}
