use core_library::repositories::{
    AlbumRepository, ArtistRepository, GenreRepository, MediaTypeRepository, PlaylistRepository,
    SqlAlbumRepository, SqlArtistRepository, SqlGenreRepository, SqlMediaTypeRepository,
    SqlPlaylistRepository, SqlTrackRepository, TrackRepository,
};
use core_library::AnyPool;
use std::sync::Arc;

/// Shared handle passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub artists: Arc<dyn ArtistRepository>,
    pub albums: Arc<dyn AlbumRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub media_types: Arc<dyn MediaTypeRepository>,
    pub tracks: Arc<dyn TrackRepository>,
    pub playlists: Arc<dyn PlaylistRepository>,
    /// Row cap for every list endpoint
    pub list_limit: u32,
}

impl AppState {
    /// Build SQL-backed repositories over one shared pool.
    pub fn new(pool: AnyPool, list_limit: u32) -> Self {
        Self {
            artists: Arc::new(SqlArtistRepository::new(pool.clone())),
            albums: Arc::new(SqlAlbumRepository::new(pool.clone())),
            genres: Arc::new(SqlGenreRepository::new(pool.clone())),
            media_types: Arc::new(SqlMediaTypeRepository::new(pool.clone())),
            tracks: Arc::new(SqlTrackRepository::new(pool.clone())),
            playlists: Arc::new(SqlPlaylistRepository::new(pool)),
            list_limit,
        }
    }
}
