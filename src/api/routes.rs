use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::handlers::{
    create_link, delete_link, health_check, list_links, update_link, AppState,
};

pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/links", get(list_links).post(create_link))
        .route("/links/{id}", put(update_link).delete(delete_link))
        .with_state(state)
}
