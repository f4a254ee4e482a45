//! Site content (key/value copy blocks) model and DTOs.

use serde::{Deserialize, Serialize};
use sitekit_core::types::{DbId, EpochSecs};
use sqlx::FromRow;

/// Full row from the `site_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteContent {
    pub id: DbId,
    pub content_key: String,
    pub content_value: String,
    pub last_updated: EpochSecs,
}

/// Key/value projection used to build the public content map.
#[derive(Debug, Clone, FromRow)]
pub struct ContentEntry {
    pub content_key: String,
    pub content_value: String,
}

/// Request body for creating a content row.
#[derive(Debug, Default, Deserialize)]
pub struct CreateContent {
    pub content_key: Option<String>,
    pub content_value: Option<String>,
}

/// Request body for updating a content row's value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateContent {
    pub content_value: Option<String>,
}
