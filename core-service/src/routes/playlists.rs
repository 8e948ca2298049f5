use super::found;
use crate::error::Result;
use crate::extract::Id;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use core_library::models::{Playlist, PlaylistWithTracks};

/// Read-only; playlists and their tracks are created by the seeder.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_playlists))
        .route("/:id", get(get_playlist))
}

async fn list_playlists(State(state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    Ok(Json(state.playlists.list(state.list_limit).await?))
}

/// Playlist fields plus `TrackIds`.
async fn get_playlist(
    State(state): State<AppState>,
    Id(id): Id,
) -> Result<Json<PlaylistWithTracks>> {
    found("Playlist", id, state.playlists.find_by_id(id).await?)
}
