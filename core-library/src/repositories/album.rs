//! Album repository trait and implementation

use super::{count_rows, insert_returning_id};
use crate::error::{LibraryError, Result};
use crate::models::{Album, NewAlbum};
use async_trait::async_trait;
use sqlx::{query, query_as, AnyConnection, AnyPool};

/// Album repository interface for data access operations
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// List albums, at most `limit` rows, in storage order
    async fn list(&self, limit: u32) -> Result<Vec<Album>>;

    /// Find an album by its ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>>;

    /// Insert a new album and return it with its assigned ID
    ///
    /// # Errors
    /// Returns a database error if the artist reference does not exist
    async fn insert(&self, album: &NewAlbum) -> Result<Album>;

    /// Replace title and artist of an existing album
    ///
    /// # Errors
    /// Returns `NotFound` if no row has this ID
    async fn update(&self, id: i64, album: &NewAlbum) -> Result<Album>;

    /// Delete an album by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}

/// Insert one album row on `conn` and return its ID.
pub async fn insert_album(conn: &mut AnyConnection, album: &NewAlbum) -> Result<i64> {
    let insert = query("INSERT INTO Album (Title, ArtistId) VALUES (?, ?)")
        .bind(album.title.as_str())
        .bind(album.artist_id);

    insert_returning_id(conn, insert, "Album").await
}

/// SQL implementation of AlbumRepository
pub struct SqlAlbumRepository {
    pool: AnyPool,
}

impl SqlAlbumRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for SqlAlbumRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Album>> {
        let albums = query_as::<_, Album>("SELECT AlbumId, Title, ArtistId FROM Album LIMIT ?")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(albums)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Album>> {
        let album = query_as::<_, Album>(
            "SELECT AlbumId, Title, ArtistId FROM Album WHERE AlbumId = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(album)
    }

    async fn insert(&self, album: &NewAlbum) -> Result<Album> {
        let mut conn = self.pool.acquire().await?;
        let album_id = insert_album(&mut conn, album).await?;

        Ok(Album {
            album_id,
            title: album.title.clone(),
            artist_id: album.artist_id,
        })
    }

    async fn update(&self, id: i64, album: &NewAlbum) -> Result<Album> {
        let result = query("UPDATE Album SET Title = ?, ArtistId = ? WHERE AlbumId = ?")
            .bind(album.title.as_str())
            .bind(album.artist_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::not_found("Album", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| LibraryError::not_found("Album", id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = query("DELETE FROM Album WHERE AlbumId = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "Album").await
    }
}
