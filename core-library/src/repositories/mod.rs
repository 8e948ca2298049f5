//! # Repository Pattern Implementation
//!
//! This module provides repository traits and implementations for data access.
//! Each entity has a corresponding repository; the four editable resources
//! (artists, albums, genres, tracks) get full CRUD, media types and
//! playlists are insert-and-read.
//!
//! ## Architecture
//!
//! - Traits define the interface for each repository
//! - `Sql*` implementations run on an `AnyPool`, so the same statements serve
//!   MySQL and SQLite
//! - Every insert is also exposed as a free function over a single
//!   connection, which lets the seeder run it inside a transaction
//! - All operations return `Result<T>` for error handling
//!
//! ## Available Repositories
//!
//! - `ArtistRepository` - Artists
//! - `AlbumRepository` - Albums with their artist reference
//! - `GenreRepository` - Genres
//! - `MediaTypeRepository` - Media types (read-only over HTTP)
//! - `TrackRepository` - Tracks, with field-by-field updates
//! - `PlaylistRepository` - Playlists and their track associations

use crate::error::Result;
use crate::schema::Dialect;
use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::{Any, AnyConnection};

pub mod album;
pub mod artist;
pub mod genre;
pub mod media_type;
pub mod playlist;
pub mod track;

pub use album::{AlbumRepository, SqlAlbumRepository};
pub use artist::{ArtistRepository, SqlArtistRepository};
pub use genre::{GenreRepository, SqlGenreRepository};
pub use media_type::{MediaTypeRepository, SqlMediaTypeRepository};
pub use playlist::{PlaylistRepository, SqlPlaylistRepository};
pub use track::{SqlTrackRepository, TrackRepository};

/// Run an `INSERT` and return the id the database generated for it.
///
/// The Any driver leaves `last_insert_id` empty for SQLite, so the id is
/// read back with a second statement on the same connection.
pub(crate) async fn insert_returning_id<'q>(
    conn: &mut AnyConnection,
    insert: Query<'q, Any, AnyArguments<'q>>,
    table: &str,
) -> Result<i64> {
    let result = insert.execute(&mut *conn).await?;
    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    let sql = match Dialect::from_backend_name(conn.backend_name()) {
        Some(Dialect::Sqlite) => "SELECT last_insert_rowid()",
        Some(Dialect::MySql) => "SELECT CAST(LAST_INSERT_ID() AS SIGNED)",
        None => {
            return Err(sqlx::Error::Protocol(format!(
                "{} insert on unsupported backend {}",
                table,
                conn.backend_name()
            ))
            .into())
        }
    };

    let (id,): (i64,) = sqlx::query_as(sql).fetch_one(&mut *conn).await?;
    Ok(id)
}

/// Count the rows of a table.
pub(crate) async fn count_rows(pool: &sqlx::AnyPool, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(count)
}
