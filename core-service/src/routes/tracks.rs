//! Track endpoints
//!
//! `PUT /api/tracks/{id}` is a partial update: only the fields present in
//! the body are written. Every other resource replaces the whole row.

use super::{deleted, found, Message};
use crate::error::Result;
use crate::extract::{Id, Payload};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::{Track, TrackInput};
use tracing::{debug, info};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tracks).post(create_track))
        .route("/:id", get(get_track).put(update_track).delete(delete_track))
}

async fn list_tracks(State(state): State<AppState>) -> Result<Json<Vec<Track>>> {
    let tracks = state.tracks.list(state.list_limit).await?;
    debug!(count = tracks.len(), "Listing tracks");
    Ok(Json(tracks))
}

async fn get_track(State(state): State<AppState>, Id(id): Id) -> Result<Json<Track>> {
    found("Track", id, state.tracks.find_by_id(id).await?)
}

async fn create_track(
    State(state): State<AppState>,
    Payload(input): Payload<TrackInput>,
) -> Result<(StatusCode, Json<Track>)> {
    let track = state.tracks.insert(&input.into_new()?).await?;
    info!(track_id = track.track_id, album_id = track.album_id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

async fn update_track(
    State(state): State<AppState>,
    Id(id): Id,
    Payload(input): Payload<TrackInput>,
) -> Result<Json<Track>> {
    let patch = input.into_patch()?;
    let track = state.tracks.update(id, &patch).await?;
    info!(track_id = id, "Track updated");
    Ok(Json(track))
}

async fn delete_track(State(state): State<AppState>, Id(id): Id) -> Result<Json<Message>> {
    deleted("Track", id, state.tracks.delete(id).await?)
}
