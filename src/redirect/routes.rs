use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{list_links, AppState};

use super::handlers::redirect_to_target;

pub fn create_redirect_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_links))
        .route("/{code}", get(redirect_to_target))
        .with_state(state)
}
