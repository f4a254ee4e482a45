//! Route definitions for site content.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public routes mounted at `/content`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(content::public_map))
}

/// Admin routes mounted at `/admin/content`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list).post(content::create))
        .route("/{id}", put(content::update).delete(content::delete))
}
