//! Media type repository trait and implementation

use super::{count_rows, insert_returning_id};
use crate::error::Result;
use crate::models::MediaType;
use async_trait::async_trait;
use sqlx::{query, query_as, AnyConnection, AnyPool};

/// Media types are seeded, never edited over HTTP.
#[async_trait]
pub trait MediaTypeRepository: Send + Sync {
    async fn list(&self, limit: u32) -> Result<Vec<MediaType>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<MediaType>>;

    async fn insert(&self, name: &str) -> Result<MediaType>;

    async fn count(&self) -> Result<i64>;
}

/// Insert one media type row on `conn` and return its ID.
pub async fn insert_media_type(conn: &mut AnyConnection, name: &str) -> Result<i64> {
    let insert = query("INSERT INTO MediaType (Name) VALUES (?)")
        .bind(name);

    insert_returning_id(conn, insert, "MediaType").await
}

pub struct SqlMediaTypeRepository {
    pool: AnyPool,
}

impl SqlMediaTypeRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaTypeRepository for SqlMediaTypeRepository {
    async fn list(&self, limit: u32) -> Result<Vec<MediaType>> {
        let media_types =
            query_as::<_, MediaType>("SELECT MediaTypeId, Name FROM MediaType LIMIT ?")
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await?;

        Ok(media_types)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MediaType>> {
        let media_type = query_as::<_, MediaType>(
            "SELECT MediaTypeId, Name FROM MediaType WHERE MediaTypeId = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(media_type)
    }

    async fn insert(&self, name: &str) -> Result<MediaType> {
        let mut conn = self.pool.acquire().await?;
        let media_type_id = insert_media_type(&mut conn, name).await?;

        Ok(MediaType {
            media_type_id,
            name: name.to_string(),
        })
    }

    async fn count(&self) -> Result<i64> {
        count_rows(&self.pool, "MediaType").await
    }
}
