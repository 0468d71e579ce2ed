use crate::models::{Link, NewLink};
use crate::storage::{Storage, StorageError, StorageResult};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

pub struct PostgresStorage {
    pool: Arc<PgPool>,
}

impl PostgresStorage {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

fn map_write_error(e: sqlx::Error) -> StorageError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Other(e.into()),
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS links (
                id BIGSERIAL PRIMARY KEY,
                title TEXT,
                original_link TEXT NOT NULL,
                link_code TEXT NOT NULL UNIQUE,
                views BIGINT NOT NULL DEFAULT 0,
                created_at BIGINT NOT NULL,
                updated_at BIGINT
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_link_code ON links(link_code)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn insert(&self, link: &NewLink) -> StorageResult<Link> {
        let created_at = chrono::Utc::now().timestamp();

        let row = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (title, original_link, link_code, views, created_at)
            VALUES ($1, $2, $3, 0, $4)
            ON CONFLICT (link_code) DO NOTHING
            RETURNING id, title, original_link, link_code, views, created_at, updated_at
            "#,
        )
        .bind(&link.title)
        .bind(&link.original_link)
        .bind(&link.link_code)
        .bind(created_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| StorageError::Other(e.into()))?;

        row.ok_or(StorageError::Conflict)
    }

    async fn find_by_code(&self, link_code: &str) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, title, original_link, link_code, views, created_at, updated_at
            FROM links
            WHERE link_code = $1
            "#,
        )
        .bind(link_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, title, original_link, link_code, views, created_at, updated_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_all(&self) -> Result<Vec<Link>> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, title, original_link, link_code, views, created_at, updated_at
            FROM links
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        link_code: &str,
    ) -> StorageResult<Option<Link>> {
        let updated_at = chrono::Utc::now().timestamp();

        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET title = $1, link_code = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, title, original_link, link_code, views, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(link_code)
        .bind(updated_at)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(link)
    }

    async fn increment_views(&self, id: i64) -> Result<()> {
        let updated_at = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            UPDATE links
            SET views = views + 1, updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(updated_at)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
