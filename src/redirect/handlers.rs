use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::links::LinkError;

/// Redirect a short code to its original URL, counting the view.
///
/// Unknown codes redirect to the client's not-found page rather than
/// surfacing an error on the public path.
pub async fn redirect_to_target(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Response {
    match state.links.resolve(&code).await {
        Ok(target) => found(&target),
        Err(LinkError::NotFound) => {
            tracing::debug!(link_code = %code, "no link for code");
            let not_found_page = format!("{}/404", state.client_origin.trim_end_matches('/'));
            found(&not_found_page)
        }
        Err(err) => {
            tracing::error!(link_code = %code, error = %err, "redirect lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

// axum's Redirect helper only offers 303/307/308; the public path answers
// with a plain 302 Found
fn found(target: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, target.to_string())]).into_response()
}
