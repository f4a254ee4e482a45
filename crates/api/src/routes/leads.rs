//! Route definitions for contact leads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Public routes mounted at `/leads`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(leads::create))
}

/// Admin routes mounted at `/admin/leads`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", get(leads::list))
}
