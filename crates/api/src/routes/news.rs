//! Route definitions for news articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Public routes mounted at `/news`.
///
/// ```text
/// GET /        -> list_public (summaries)
/// GET /{id}    -> get_public (full row)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_public))
        .route("/{id}", get(news::get_public))
}

/// Admin routes mounted at `/admin/news`. Update takes the id in the body,
/// delete takes it as `?id=`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(news::list)
            .post(news::create)
            .put(news::update)
            .delete(news::delete),
    )
}
