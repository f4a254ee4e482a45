//! Handlers for news articles.
//!
//! Public readers get the summary projection in lists and the full row by
//! id. Admin writes use full-row replace semantics: any field left out of
//! an update is written as the empty string.

use axum::extract::State;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_core::types::{now_epoch_secs, DbId};
use sitekit_core::validation::{or_empty, require};
use sitekit_db::models::news::{NewsFields, NewsInput, NewsItem, NewsSummary};
use sitekit_db::repositories::NewsRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AdminAuth;
use crate::query::IdParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Validate `title` and default the remaining fields.
fn news_fields(input: NewsInput) -> Result<NewsFields, CoreError> {
    Ok(NewsFields {
        title: require(input.title, "Title is required")?,
        summary: or_empty(input.summary),
        content: or_empty(input.content),
        cover_image_url: or_empty(input.cover_image_url),
        publish_date: or_empty(input.publish_date),
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/news
///
/// Summaries (no article body), newest first.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<NewsSummary>>> {
    let items = NewsRepo::list_summaries(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/news/{id}
pub async fn get_public(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<NewsItem>> {
    let item = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/news
///
/// Full rows including `content`, newest first.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> AppResult<Json<Vec<NewsItem>>> {
    let items = NewsRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/admin/news
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppJson(input): AppJson<NewsInput>,
) -> AppResult<Json<SuccessResponse>> {
    let fields = news_fields(input)?;
    let item = NewsRepo::create(&state.pool, &fields, now_epoch_secs()).await?;

    tracing::info!(id = item.id, title = %item.title, "News created");
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /api/admin/news
///
/// The target id travels in the body. An unknown id is a no-op success.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppJson(input): AppJson<NewsInput>,
) -> AppResult<Json<SuccessResponse>> {
    let id = input
        .id
        .ok_or_else(|| CoreError::Validation("News id is required".into()))?;
    let fields = news_fields(input)?;

    let affected = NewsRepo::replace(&state.pool, id, &fields).await?;
    if affected == 0 {
        tracing::debug!(id, "News update matched no row");
    }
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/admin/news?id={id}
///
/// Unconditional; deleting an unknown id succeeds.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppQuery(params): AppQuery<IdParams>,
) -> AppResult<Json<SuccessResponse>> {
    let id = params
        .id
        .ok_or_else(|| CoreError::Validation("News id is required".into()))?;

    let affected = NewsRepo::delete(&state.pool, id).await?;
    tracing::info!(id, affected, "News deleted");
    Ok(Json(SuccessResponse::ok()))
}
