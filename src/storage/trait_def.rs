use crate::models::{Link, NewLink};
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("link code already exists")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// The link store. One implementation per database backend; the unique
/// constraint on `link_code` is the authoritative guard against allocation
/// races, the application-level existence checks are a fast path only.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initialize the storage (create the schema).
    async fn init(&self) -> Result<()>;

    /// Insert a new link with `views = 0` and a null `updated_at`.
    /// Returns `StorageError::Conflict` if the code is already held.
    async fn insert(&self, link: &NewLink) -> StorageResult<Link>;

    /// Look up a link by its short code.
    async fn find_by_code(&self, link_code: &str) -> Result<Option<Link>>;

    /// Look up a link by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>>;

    /// Every stored link, in store order.
    async fn find_all(&self) -> Result<Vec<Link>>;

    /// Persist a new title and code for `id`, stamping `updated_at`.
    /// Returns `Ok(None)` if no link has that id and `StorageError::Conflict`
    /// if another link already holds the code.
    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        link_code: &str,
    ) -> StorageResult<Option<Link>>;

    /// Atomically add one view. A single store-side statement so concurrent
    /// redirects never lose an increment.
    async fn increment_views(&self, id: i64) -> Result<()>;

    /// Delete a link, freeing its code. Returns false if the id was absent.
    async fn delete(&self, id: i64) -> Result<bool>;
}
