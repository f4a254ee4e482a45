//! News article model, list projection, and DTOs.

use serde::{Deserialize, Serialize};
use sitekit_core::types::{DbId, EpochSecs};
use sqlx::FromRow;

/// Full row from the `news` table. `content` is raw HTML.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image_url: String,
    pub publish_date: String,
    pub created_at: EpochSecs,
}

/// Public list projection. Leaves out the article body.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsSummary {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    pub cover_image_url: String,
    pub publish_date: String,
}

/// Request body for creating or replacing an article.
///
/// `id` is only read on update. Every field other than `title` defaults to
/// the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct NewsInput {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub publish_date: Option<String>,
}

/// Validated column values for an insert or full-row replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFields {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image_url: String,
    pub publish_date: String,
}
