//! Handler for the public redirect endpoint.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The visit counter update and the redirect decision are one store
/// operation: the handler asks the resolver for the post-increment record
/// and redirects to its target. A request either counts and redirects, or
/// returns 404 and counts nothing.
///
/// # Responses
///
/// - **302 Found** with `Location: <target>`
/// - **404 Not Found** for an unknown (or concurrently deleted) code
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let link = state.redirect_service.resolve(&code).await?;

    tracing::debug!(code = %link.code, clicks = link.clicks, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.target)],
    )
        .into_response())
}
