use super::{deleted, found, Message};
use crate::error::Result;
use crate::extract::{Id, Payload};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::{Album, AlbumInput};
use tracing::{debug, info};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_albums).post(create_album))
        .route("/:id", get(get_album).put(update_album).delete(delete_album))
}

async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>> {
    let albums = state.albums.list(state.list_limit).await?;
    debug!(count = albums.len(), "Listing albums");
    Ok(Json(albums))
}

async fn get_album(State(state): State<AppState>, Id(id): Id) -> Result<Json<Album>> {
    found("Album", id, state.albums.find_by_id(id).await?)
}

/// An unknown `ArtistId` is rejected by the foreign key and surfaces as 500.
async fn create_album(
    State(state): State<AppState>,
    Payload(input): Payload<AlbumInput>,
) -> Result<(StatusCode, Json<Album>)> {
    let album = state.albums.insert(&input.into_new()?).await?;
    info!(album_id = album.album_id, artist_id = album.artist_id, "Album created");
    Ok((StatusCode::CREATED, Json(album)))
}

async fn update_album(
    State(state): State<AppState>,
    Id(id): Id,
    Payload(input): Payload<AlbumInput>,
) -> Result<Json<Album>> {
    let album = state.albums.update(id, &input.into_new()?).await?;
    info!(album_id = id, "Album updated");
    Ok(Json(album))
}

async fn delete_album(State(state): State<AppState>, Id(id): Id) -> Result<Json<Message>> {
    deleted("Album", id, state.albums.delete(id).await?)
}
