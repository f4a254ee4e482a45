//! Handlers for admin login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitekit_core::types::{now_epoch_secs, EpochSecs};
use sitekit_db::models::session::CreateSession;
use sitekit_db::repositories::{AdminRepo, SessionRepo};

use crate::auth::password::verify_login;
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AdminAuth;
use crate::state::AppState;

/// Message for every failed login. Unknown username and wrong password
/// must look identical to the caller.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session expiry, epoch seconds.
    pub expires_at: EpochSecs,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
///
/// Verify username + password and open a session. The returned token is
/// presented as `Authorization: Bearer <token>` on admin endpoints.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (input.username, input.password) else {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    // Unknown usernames still pay for an Argon2 verification.
    let admin = AdminRepo::find_by_username(&state.pool, &username).await?;
    let password_valid = verify_login(&password, admin.as_ref().map(|a| a.password_hash.as_str()))
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let admin = match admin {
        Some(admin) if password_valid => admin,
        Some(admin) => {
            tracing::warn!(admin_id = admin.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!(%username, "Login failed: unknown username");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let (token, token_hash) = generate_session_token();
    let expires_at = now_epoch_secs() + state.config.session_ttl_secs();

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            admin_id: admin.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, expires_at, "Admin logged in");
    Ok(Json(LoginResponse { token, expires_at }))
}

/// POST /api/admin/logout
///
/// Revoke the presented session. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, admin: AdminAuth) -> AppResult<StatusCode> {
    SessionRepo::revoke(&state.pool, admin.session_id).await?;
    tracing::info!(admin_id = admin.admin_id, "Admin logged out");
    Ok(StatusCode::NO_CONTENT)
}
