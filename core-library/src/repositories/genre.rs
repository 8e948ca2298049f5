//! Genre repository trait and implementation

use super::{count_rows, insert_returning_id};
use crate::error::{LibraryError, Result};
use crate::models::{Genre, NewGenre};
use async_trait::async_trait;
use sqlx::{query, query_as, AnyConnection, AnyPool};

/// Genre repository interface for data access operations
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn list(&self, limit: u32) -> Result<Vec<Genre>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>>;

    async fn insert(&self, genre: &NewGenre) -> Result<Genre>;

    /// Rename an existing genre
    ///
    /// # Errors
    /// Returns `NotFound` if no row has this ID
    async fn update(&self, id: i64, genre: &NewGenre) -> Result<Genre>;

    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}

/// Insert one genre row on `conn` and return its ID.
pub async fn insert_genre(conn: &mut AnyConnection, genre: &NewGenre) -> Result<i64> {
    let insert = query("INSERT INTO Genre (Name) VALUES (?)")
        .bind(genre.name.as_str());

    insert_returning_id(conn, insert, "Genre").await
}

/// SQL implementation of GenreRepository
pub struct SqlGenreRepository {
    pool: AnyPool,
}

impl SqlGenreRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for SqlGenreRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Genre>> {
        let genres = query_as::<_, Genre>("SELECT GenreId, Name FROM Genre LIMIT ?")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(genres)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>> {
        let genre = query_as::<_, Genre>("SELECT GenreId, Name FROM Genre WHERE GenreId = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    async fn insert(&self, genre: &NewGenre) -> Result<Genre> {
        let mut conn = self.pool.acquire().await?;
        let genre_id = insert_genre(&mut conn, genre).await?;

        Ok(Genre {
            genre_id,
            name: genre.name.clone(),
        })
    }

    async fn update(&self, id: i64, genre: &NewGenre) -> Result<Genre> {
        let result = query("UPDATE Genre SET Name = ? WHERE GenreId = ?")
            .bind(genre.name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::not_found("Genre", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| LibraryError::not_found("Genre", id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = query("DELETE FROM Genre WHERE GenreId = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "Genre").await
    }
}
