//! Artist repository trait and implementation

use super::{count_rows, insert_returning_id};
use crate::error::{LibraryError, Result};
use crate::models::{Artist, NewArtist};
use async_trait::async_trait;
use sqlx::{query, query_as, AnyConnection, AnyPool};

/// Artist repository interface for data access operations
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// List artists, at most `limit` rows, in storage order
    async fn list(&self, limit: u32) -> Result<Vec<Artist>>;

    /// Find an artist by its ID
    ///
    /// # Returns
    /// - `Ok(Some(artist))` if found
    /// - `Ok(None)` if not found
    /// - `Err` if database error occurs
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>>;

    /// Insert a new artist and return it with its assigned ID
    async fn insert(&self, artist: &NewArtist) -> Result<Artist>;

    /// Replace every field of an existing artist
    ///
    /// # Errors
    /// Returns `NotFound` if no row has this ID
    async fn update(&self, id: i64, artist: &NewArtist) -> Result<Artist>;

    /// Delete an artist by ID
    ///
    /// # Returns
    /// - `Ok(true)` if artist was deleted
    /// - `Ok(false)` if artist was not found
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Count total artists
    async fn count(&self) -> Result<i64>;
}

/// Insert one artist row on `conn` and return its ID.
pub async fn insert_artist(conn: &mut AnyConnection, artist: &NewArtist) -> Result<i64> {
    let insert = query("INSERT INTO Artist (Name) VALUES (?)")
        .bind(artist.name.as_str());

    insert_returning_id(conn, insert, "Artist").await
}

/// SQL implementation of ArtistRepository
pub struct SqlArtistRepository {
    pool: AnyPool,
}

impl SqlArtistRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for SqlArtistRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Artist>> {
        let artists = query_as::<_, Artist>("SELECT ArtistId, Name FROM Artist LIMIT ?")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(artists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>> {
        let artist = query_as::<_, Artist>("SELECT ArtistId, Name FROM Artist WHERE ArtistId = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artist)
    }

    async fn insert(&self, artist: &NewArtist) -> Result<Artist> {
        let mut conn = self.pool.acquire().await?;
        let artist_id = insert_artist(&mut conn, artist).await?;

        Ok(Artist {
            artist_id,
            name: artist.name.clone(),
        })
    }

    async fn update(&self, id: i64, artist: &NewArtist) -> Result<Artist> {
        let result = query("UPDATE Artist SET Name = ? WHERE ArtistId = ?")
            .bind(artist.name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::not_found("Artist", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| LibraryError::not_found("Artist", id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = query("DELETE FROM Artist WHERE ArtistId = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "Artist").await
    }
}
