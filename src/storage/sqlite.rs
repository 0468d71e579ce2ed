use crate::models::{Link, NewLink};
use crate::storage::{Storage, StorageError, StorageResult};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteStorage {
    pool: Arc<SqlitePool>,
}

impl SqliteStorage {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
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
impl Storage for SqliteStorage {
    async fn init(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids from being reused after a delete
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                original_link TEXT NOT NULL,
                link_code TEXT NOT NULL UNIQUE,
                views INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER
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

        let result = sqlx::query(
            r#"
            INSERT INTO links (title, original_link, link_code, views, created_at)
            VALUES (?, ?, ?, 0, ?)
            ON CONFLICT(link_code) DO NOTHING
            "#,
        )
        .bind(&link.title)
        .bind(&link.original_link)
        .bind(&link.link_code)
        .bind(created_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| StorageError::Other(e.into()))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Conflict);
        }

        let row = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, title, original_link, link_code, views, created_at, updated_at
            FROM links
            WHERE link_code = ?
            "#,
        )
        .bind(&link.link_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| StorageError::Other(e.into()))?;

        Ok(row)
    }

    async fn find_by_code(&self, link_code: &str) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, title, original_link, link_code, views, created_at, updated_at
            FROM links
            WHERE link_code = ?
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
            WHERE id = ?
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

        let result = sqlx::query(
            r#"
            UPDATE links
            SET title = ?, link_code = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(link_code)
        .bind(updated_at)
        .bind(id)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let link = self
            .find_by_id(id)
            .await
            .map_err(StorageError::Other)?;

        Ok(link)
    }

    async fn increment_views(&self, id: i64) -> Result<()> {
        let updated_at = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            UPDATE links
            SET views = views + 1, updated_at = ?
            WHERE id = ?
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
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
