//! Playlist repository trait and implementation

use super::{count_rows, insert_returning_id};
use crate::error::Result;
use crate::models::{Playlist, PlaylistWithTracks};
use async_trait::async_trait;
use sqlx::{query, query_as, Any, AnyConnection, AnyPool, Executor};

/// Playlist repository interface for data access operations
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// List playlists, at most `limit` rows, in storage order
    async fn list(&self, limit: u32) -> Result<Vec<Playlist>>;

    /// Find a playlist and the ids of its tracks
    async fn find_by_id(&self, id: i64) -> Result<Option<PlaylistWithTracks>>;

    async fn insert(&self, name: &str) -> Result<Playlist>;

    /// Add a track to a playlist
    ///
    /// Duplicate pairs are not rejected; callers avoid them.
    async fn add_track(&self, playlist_id: i64, track_id: i64) -> Result<()>;

    /// Get all track IDs of a playlist, ordered by track ID
    async fn get_track_ids(&self, playlist_id: i64) -> Result<Vec<i64>>;

    async fn count(&self) -> Result<i64>;

    /// Count association rows across all playlists
    async fn count_tracks(&self) -> Result<i64>;
}

/// Insert one playlist row on `conn` and return its ID.
pub async fn insert_playlist(conn: &mut AnyConnection, name: &str) -> Result<i64> {
    let insert = query("INSERT INTO Playlist (Name) VALUES (?)")
        .bind(name);

    insert_returning_id(conn, insert, "Playlist").await
}

/// Insert one association row through any executor.
pub async fn insert_playlist_track<'e, E>(executor: E, playlist_id: i64, track_id: i64) -> Result<()>
where
    E: Executor<'e, Database = Any>,
{
    query("INSERT INTO PlaylistTrack (PlaylistId, TrackId) VALUES (?, ?)")
        .bind(playlist_id)
        .bind(track_id)
        .execute(executor)
        .await?;

    Ok(())
}

/// SQL implementation of PlaylistRepository
pub struct SqlPlaylistRepository {
    pool: AnyPool,
}

impl SqlPlaylistRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistRepository for SqlPlaylistRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Playlist>> {
        let playlists =
            query_as::<_, Playlist>("SELECT PlaylistId, Name FROM Playlist LIMIT ?")
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await?;

        Ok(playlists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PlaylistWithTracks>> {
        let playlist = query_as::<_, Playlist>(
            "SELECT PlaylistId, Name FROM Playlist WHERE PlaylistId = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(playlist) = playlist else {
            return Ok(None);
        };

        let track_ids = self.get_track_ids(id).await?;
        Ok(Some(PlaylistWithTracks {
            playlist,
            track_ids,
        }))
    }

    async fn insert(&self, name: &str) -> Result<Playlist> {
        let mut conn = self.pool.acquire().await?;
        let playlist_id = insert_playlist(&mut conn, name).await?;

        Ok(Playlist {
            playlist_id,
            name: name.to_string(),
        })
    }

    async fn add_track(&self, playlist_id: i64, track_id: i64) -> Result<()> {
        insert_playlist_track(&self.pool, playlist_id, track_id).await
    }

    async fn get_track_ids(&self, playlist_id: i64) -> Result<Vec<i64>> {
        let track_ids = query_as::<_, (i64,)>(
            "SELECT TrackId FROM PlaylistTrack WHERE PlaylistId = ? ORDER BY TrackId ASC",
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(|(id,)| id).collect())?;

        Ok(track_ids)
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "Playlist").await
    }

    async fn count_tracks(&self) -> Result<i64> {
        count_rows(&self.pool, "PlaylistTrack").await
    }
}
