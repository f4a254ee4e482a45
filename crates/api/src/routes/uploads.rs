//! Route definitions for uploads and image retrieval.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Public routes mounted at `/images`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{key}", get(uploads::get_image))
}

/// Admin routes mounted at `/admin/upload`. Request bodies larger than
/// `max_upload_bytes` are rejected with 413.
pub fn admin_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
