//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::{CreateLinkRequest, DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links` with body `{"target": "...", "code": "..."}` (code
/// optional).
///
/// # Responses
///
/// - **201 Created** with the new record
/// - **400 Bad Request** for an invalid target URL or custom code
/// - **409 Conflict** when the custom code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .link_service
        .create_link(payload.target, payload.code)
        .await?;

    tracing::info!(code = %link.code, "link created");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link record without touching its counters.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Responses
///
/// - **200 OK** with the record
/// - **404 Not Found** for an unknown code
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{code}`
///
/// # Responses
///
/// - **200 OK** `{"ok": true}`
/// - **404 Not Found** for an unknown code
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    tracing::info!(code = %code, "link deleted");

    Ok(Json(DeleteResponse { ok: true }))
}
