use super::{deleted, found, Message};
use crate::error::Result;
use crate::extract::{Id, Payload};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::{Artist, ArtistInput};
use tracing::{debug, info};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_artists).post(create_artist))
        .route(
            "/:id",
            get(get_artist).put(update_artist).delete(delete_artist),
        )
}

async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = state.artists.list(state.list_limit).await?;
    debug!(count = artists.len(), "Listing artists");
    Ok(Json(artists))
}

async fn get_artist(State(state): State<AppState>, Id(id): Id) -> Result<Json<Artist>> {
    found("Artist", id, state.artists.find_by_id(id).await?)
}

async fn create_artist(
    State(state): State<AppState>,
    Payload(input): Payload<ArtistInput>,
) -> Result<(StatusCode, Json<Artist>)> {
    let artist = state.artists.insert(&input.into_new()?).await?;
    info!(artist_id = artist.artist_id, "Artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

async fn update_artist(
    State(state): State<AppState>,
    Id(id): Id,
    Payload(input): Payload<ArtistInput>,
) -> Result<Json<Artist>> {
    let artist = state.artists.update(id, &input.into_new()?).await?;
    info!(artist_id = id, "Artist updated");
    Ok(Json(artist))
}

async fn delete_artist(State(state): State<AppState>, Id(id): Id) -> Result<Json<Message>> {
    deleted("Artist", id, state.artists.delete(id).await?)
}
