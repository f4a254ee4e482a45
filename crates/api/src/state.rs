use std::sync::Arc;

use sitekit_core::blob::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers keep nothing here between requests; all durable state lives in
/// the record and blob stores.
#[derive(Clone)]
pub struct AppState {
    /// Record store connection pool.
    pub pool: sitekit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob store for uploaded media.
    pub blobs: Arc<dyn BlobStore>,
}
