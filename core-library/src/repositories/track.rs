//! Track repository trait and implementation
//!
//! Unlike the other editable resources, tracks are updated field by field:
//! [`TrackRepository::update`] only touches the columns present in the
//! [`TrackPatch`].

use super::{count_rows, insert_returning_id};
use crate::error::{LibraryError, Result};
use crate::models::{NewTrack, Track, TrackPatch};
use async_trait::async_trait;
use sqlx::{query, query_as, Any, AnyConnection, AnyPool, QueryBuilder};

/// `UnitPrice` is DECIMAL in MySQL; casting keeps the decoded type `f64` on
/// every backend.
const TRACK_COLUMNS: &str = "TrackId, Name, AlbumId, MediaTypeId, GenreId, Composer, \
     Milliseconds, Bytes, CAST(UnitPrice AS DOUBLE) AS UnitPrice";

/// Track repository interface for data access operations
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// List tracks, at most `limit` rows, in storage order
    async fn list(&self, limit: u32) -> Result<Vec<Track>>;

    /// Find a track by its ID
    ///
    /// # Returns
    /// - `Ok(Some(track))` if found
    /// - `Ok(None)` if not found
    /// - `Err` if database error occurs
    async fn find_by_id(&self, id: i64) -> Result<Option<Track>>;

    /// Insert a new track
    ///
    /// # Errors
    /// Returns error if:
    /// - Track validation fails
    /// - A referenced album, genre or media type does not exist
    /// - Database error occurs
    async fn insert(&self, track: &NewTrack) -> Result<Track>;

    /// Apply a partial update and return the track as stored afterwards
    ///
    /// # Errors
    /// Returns error if:
    /// - The patch is empty or invalid
    /// - Track does not exist
    /// - Database error occurs
    async fn update(&self, id: i64, patch: &TrackPatch) -> Result<Track>;

    /// Delete a track by ID
    ///
    /// # Returns
    /// - `Ok(true)` if track was deleted
    /// - `Ok(false)` if track was not found
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}

/// Insert one track row on `conn` and return its ID.
pub async fn insert_track(conn: &mut AnyConnection, track: &NewTrack) -> Result<i64> {
    track.validate()?;

    let insert = query(
        r#"
        INSERT INTO Track (
            Name, AlbumId, MediaTypeId, GenreId, Composer, Milliseconds, Bytes, UnitPrice
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(track.name.as_str())
    .bind(track.album_id)
    .bind(track.media_type_id)
    .bind(track.genre_id)
    .bind(track.composer.clone())
    .bind(track.milliseconds)
    .bind(track.bytes)
    .bind(track.unit_price);

    insert_returning_id(conn, insert, "Track").await
}

/// SQL implementation of TrackRepository
pub struct SqlTrackRepository {
    pool: AnyPool,
}

impl SqlTrackRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackRepository for SqlTrackRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Track>> {
        let sql = format!("SELECT {} FROM Track LIMIT ?", TRACK_COLUMNS);
        let tracks = query_as::<_, Track>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(tracks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Track>> {
        let sql = format!("SELECT {} FROM Track WHERE TrackId = ?", TRACK_COLUMNS);
        let track = query_as::<_, Track>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(track)
    }

    async fn insert(&self, track: &NewTrack) -> Result<Track> {
        let mut conn = self.pool.acquire().await?;
        let track_id = insert_track(&mut conn, track).await?;

        Ok(Track {
            track_id,
            name: track.name.clone(),
            album_id: track.album_id,
            media_type_id: track.media_type_id,
            genre_id: track.genre_id,
            composer: track.composer.clone(),
            milliseconds: track.milliseconds,
            bytes: track.bytes,
            unit_price: track.unit_price,
        })
    }

    async fn update(&self, id: i64, patch: &TrackPatch) -> Result<Track> {
        patch.validate()?;

        let mut builder = QueryBuilder::<Any>::new("UPDATE Track SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(name) = &patch.name {
                fields.push("Name = ").push_bind_unseparated(name.clone());
            }
            if let Some(album_id) = patch.album_id {
                fields.push("AlbumId = ").push_bind_unseparated(album_id);
            }
            if let Some(media_type_id) = patch.media_type_id {
                fields
                    .push("MediaTypeId = ")
                    .push_bind_unseparated(media_type_id);
            }
            if let Some(genre_id) = patch.genre_id {
                fields.push("GenreId = ").push_bind_unseparated(genre_id);
            }
            if let Some(composer) = &patch.composer {
                fields.push("Composer = ").push_bind_unseparated(composer.clone());
            }
            if let Some(milliseconds) = patch.milliseconds {
                fields
                    .push("Milliseconds = ")
                    .push_bind_unseparated(milliseconds);
            }
            if let Some(bytes) = patch.bytes {
                fields.push("Bytes = ").push_bind_unseparated(bytes);
            }
            if let Some(unit_price) = patch.unit_price {
                fields.push("UnitPrice = ").push_bind_unseparated(unit_price);
            }
        }
        builder.push(" WHERE TrackId = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::not_found("Track", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| LibraryError::not_found("Track", id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = query("DELETE FROM Track WHERE TrackId = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "Track").await
    }
}
