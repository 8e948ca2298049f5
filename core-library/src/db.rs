//! # Database Connection Pool Module
//!
//! Provides the connection pool shared by every repository and the seeder.
//!
//! ## Features
//!
//! - **Backend-neutral pool**: `sqlx::AnyPool`, so the same statements run
//!   against MySQL in production and SQLite in tests
//! - **Connection Pooling**: a connection is acquired per statement (or per
//!   seeding step) and returned to the pool on drop, on every exit path
//! - **Health Checks**: connection validation at startup
//! - **Schema bootstrap**: `CREATE TABLE IF NOT EXISTS` for the detected
//!   backend, used by tests and by the seeder's `--create-schema` flag
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_library::db::create_pool;
//! use core_runtime::config::DatabaseSettings;
//!
//! let pool = create_pool(&DatabaseSettings::from_env()?).await?;
//! ```
//!
//! ## Testing
//!
//! For tests, use the in-memory SQLite pool with the schema installed:
//!
//! ```rust,ignore
//! let pool = create_test_pool().await?;
//! ```

use crate::schema::{Dialect, MYSQL_SCHEMA, SQLITE_SCHEMA};
use crate::{LibraryError, Result};
use core_runtime::config::DatabaseSettings;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::{AnyPool, Executor};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Create the connection pool described by `settings`
///
/// This function:
/// 1. Registers the MySQL and SQLite drivers with the `Any` backend
/// 2. Creates a connection pool with the configured limits
/// 3. Performs a health check
///
/// # Errors
///
/// Returns an error if the settings are invalid, the database cannot be
/// reached, or the health check fails.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<AnyPool> {
    settings.validate()?;
    install_default_drivers();

    info!(
        database_url = %settings.redacted_url(),
        max_connections = settings.max_connections,
        "Creating database connection pool"
    );

    let pool = AnyPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.connection_url())
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create connection pool");
            LibraryError::Database(e)
        })?;

    health_check(&pool).await?;

    info!(
        connections = pool.size(),
        "Database connection pool created successfully"
    );

    Ok(pool)
}

/// Create an in-memory SQLite pool with the schema installed
///
/// The pool is limited to a single long-lived connection: every new SQLite
/// connection to `:memory:` would otherwise see its own empty database.
///
/// # Examples
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_something() {
///     let pool = create_test_pool().await.unwrap();
///     // Use pool for testing
/// }
/// ```
pub async fn create_test_pool() -> Result<AnyPool> {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(5))
        .connect("sqlite::memory:")
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Detect which SQL dialect the pool speaks
pub async fn dialect(pool: &AnyPool) -> Result<Dialect> {
    let conn = pool.acquire().await?;
    Dialect::from_backend_name(conn.backend_name()).ok_or_else(|| {
        LibraryError::invalid(
            "database_url",
            format!("unsupported database backend: {}", conn.backend_name()),
        )
    })
}

/// Create every table that does not exist yet
///
/// Existing tables are left untouched, so this is safe against a populated
/// Chinook database.
pub async fn create_schema(pool: &AnyPool) -> Result<()> {
    let dialect = dialect(pool).await?;
    let statements = match dialect {
        Dialect::MySql => MYSQL_SCHEMA,
        Dialect::Sqlite => SQLITE_SCHEMA,
    };

    info!(?dialect, "Creating schema");

    for statement in statements {
        pool.execute(*statement).await.map_err(|e| {
            warn!(error = %e, "Schema statement failed");
            LibraryError::Database(e)
        })?;
    }

    Ok(())
}

/// Perform a health check on the connection pool
///
/// # Errors
///
/// Returns an error if the health check query fails
async fn health_check(pool: &AnyPool) -> Result<()> {
    debug!("Performing database health check");

    sqlx::query("SELECT 1").execute(pool).await.map_err(|e| {
        warn!(error = %e, "Database health check failed");
        LibraryError::Database(e)
    })?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_test_pool() {
        let pool = create_test_pool().await;
        assert!(pool.is_ok(), "Should create test pool successfully");
    }

    #[tokio::test]
    async fn test_health_check() {
        let pool = create_test_pool().await.unwrap();
        assert!(health_check(&pool).await.is_ok(), "Health check should pass");
    }

    #[tokio::test]
    async fn test_dialect_detection() {
        let pool = create_test_pool().await.unwrap();
        assert_eq!(dialect(&pool).await.unwrap(), Dialect::Sqlite);
    }

    #[tokio::test]
    async fn test_schema_creates_tables() {
        let pool = create_test_pool().await.unwrap();

        for table in [
            "Artist",
            "Album",
            "Genre",
            "MediaType",
            "Track",
            "Playlist",
            "PlaylistTrack",
        ] {
            let (count,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
            assert_eq!(count, 1, "{table} table should exist");
        }
    }

    #[tokio::test]
    async fn test_required_columns_reject_null() {
        let pool = create_test_pool().await.unwrap();

        for statement in [
            "INSERT INTO Artist (Name) VALUES (NULL)",
            "INSERT INTO Genre (Name) VALUES (NULL)",
            "INSERT INTO MediaType (Name) VALUES (NULL)",
            "INSERT INTO Playlist (Name) VALUES (NULL)",
            "INSERT INTO Track (Name, AlbumId, MediaTypeId, GenreId, Milliseconds, UnitPrice) \
             VALUES ('Orphan', NULL, 1, 1, 1000, 0.99)",
            "INSERT INTO Track (Name, AlbumId, MediaTypeId, GenreId, Milliseconds, UnitPrice) \
             VALUES ('Orphan', 1, 1, NULL, 1000, 0.99)",
        ] {
            let err = pool.execute(statement).await.unwrap_err();
            assert!(err.to_string().contains("NOT NULL"), "{statement}: {err}");
        }
    }

    #[tokio::test]
    async fn test_create_schema_is_repeatable() {
        let pool = create_test_pool().await.unwrap();
        assert!(create_schema(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_pool_from_settings() {
        let settings = DatabaseSettings::default()
            .with_url("sqlite::memory:")
            .with_max_connections(1);
        let pool = create_pool(&settings).await;
        assert!(pool.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_database_is_storage_error() {
        let settings = DatabaseSettings::default()
            .with_url("sqlite:///nonexistent-dir/for/sure/music.db?mode=ro")
            .with_acquire_timeout(Duration::from_secs(1));
        let result = create_pool(&settings).await;
        assert!(matches!(result, Err(LibraryError::Database(_))));
    }
}
