//! Session-backed admin authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sitekit_core::types::{now_epoch_secs, DbId};
use sitekit_db::repositories::SessionRepo;

use crate::auth::token::{bearer_token, hash_session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from the `Authorization` header.
///
/// Use this as an extractor parameter in any admin-only handler:
///
/// ```ignore
/// async fn my_handler(admin: AdminAuth) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Rejects with 401 when the header is missing or not `Bearer `-shaped, and
/// when the token does not match an unexpired session.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub admin_id: DbId,
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError::unauthorized("Missing or malformed Authorization header. Expected: Bearer <token>")
        })?;

        let session =
            SessionRepo::find_live(&state.pool, &hash_session_token(token), now_epoch_secs())
                .await?
                .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))?;

        Ok(AdminAuth {
            admin_id: session.admin_id,
            session_id: session.id,
        })
    }
}
