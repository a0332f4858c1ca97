//! Route configuration.

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler, redirect_handler,
};
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `POST   /links`         - Create a short link
/// - `GET    /links`         - List links, newest first
/// - `GET    /links/{code}`  - Fetch one record
/// - `DELETE /links/{code}`  - Delete a record
/// - `GET    /healthz`       - Liveness check
/// - `GET    /{code}`        - Public redirect (counts the visit)
///
/// The catch-all redirect route is registered last so the fixed paths
/// above shadow it.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/{code}", get(redirect_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
