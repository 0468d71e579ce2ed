use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Link {
    pub id: i64,
    pub title: Option<String>,
    pub original_link: String,
    pub link_code: String,
    pub views: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Column set written on insert. The store assigns `id`, `views`,
/// `created_at` and leaves `updated_at` null.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub title: Option<String>,
    pub original_link: String,
    pub link_code: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub title: Option<String>,
    pub original_link: Option<String>,
    pub link_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    pub title: Option<String>,
    pub link_code: Option<String>,
}
