pub mod auth;
pub mod content;
pub mod health;
pub mod leads;
pub mod news;
pub mod uploads;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                 GET     public key/value map
/// /news                    GET     public summaries
/// /news/{id}               GET     public full article
/// /leads                   POST    public contact form
/// /images/{key}            GET     public stored upload
///
/// /admin/login             POST    login (public)
/// /admin/logout            POST    revoke session
/// /admin/content           GET, POST
/// /admin/content/{id}      PUT, DELETE
/// /admin/news              GET, POST, PUT, DELETE (?id=)
/// /admin/leads             GET
/// /admin/upload            POST    multipart `file`
/// ```
///
/// Every `/admin` route except login requires a live session token.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let admin = Router::new()
        .merge(auth::router())
        .nest("/content", content::admin_router())
        .nest("/news", news::admin_router())
        .nest("/leads", leads::admin_router())
        .nest("/upload", uploads::admin_router(config.max_upload_bytes));

    Router::new()
        .nest("/content", content::public_router())
        .nest("/news", news::public_router())
        .nest("/leads", leads::public_router())
        .nest("/images", uploads::public_router())
        .nest("/admin", admin)
}
