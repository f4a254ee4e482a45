//! Handlers for site content: the public key/value map and admin CRUD.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_core::types::{now_epoch_secs, DbId};
use sitekit_core::validation::{non_empty, require};
use sitekit_db::models::content::{CreateContent, SiteContent, UpdateContent};
use sitekit_db::repositories::ContentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AdminAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/content
///
/// Every content row folded into a `{ key: value }` object.
pub async fn public_map(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, String>>> {
    let entries = ContentRepo::list_entries(&state.pool).await?;
    let map = entries
        .into_iter()
        .map(|e| (e.content_key, e.content_value))
        .collect();
    Ok(Json(map))
}

/// GET /api/admin/content
///
/// Full rows, most recently updated first.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> AppResult<Json<Vec<SiteContent>>> {
    let rows = ContentRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/admin/content
///
/// Returns 201 with the created row, or 409 when the key already exists.
/// Duplicates are detected by the store's unique constraint, not a lookup.
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppJson(input): AppJson<CreateContent>,
) -> AppResult<(StatusCode, Json<SiteContent>)> {
    let (Some(key), Some(value)) = (
        non_empty(input.content_key),
        non_empty(input.content_value),
    ) else {
        return Err(CoreError::Validation("Missing key or value".into()).into());
    };

    let row = ContentRepo::create(&state.pool, &key, &value, now_epoch_secs())
        .await
        .map_err(|e| {
            if sitekit_db::is_unique_violation(&e) {
                AppError::Core(CoreError::Conflict(format!(
                    "The key '{key}' already exists."
                )))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(id = row.id, key = %row.content_key, "Content created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/content/{id}
///
/// Replace the value and refresh `last_updated`. An unknown id is a no-op
/// that still reports success.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateContent>,
) -> AppResult<Json<SuccessResponse>> {
    let value = require(input.content_value, "Missing value")?;

    let affected = ContentRepo::update_value(&state.pool, id, &value, now_epoch_secs()).await?;
    if affected == 0 {
        tracing::debug!(id, "Content update matched no row");
    }
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/admin/content/{id}
///
/// Unconditional; deleting an unknown id succeeds.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminAuth,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let affected = ContentRepo::delete(&state.pool, id).await?;
    tracing::info!(id, affected, "Content deleted");
    Ok(Json(SuccessResponse::ok()))
}
