//! Admin login session model.

use sitekit_core::types::{DbId, EpochSecs};
use sqlx::FromRow;

/// Row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub admin_id: DbId,
    /// SHA-256 hex digest of the bearer token.
    pub token_hash: String,
    pub expires_at: EpochSecs,
    pub created_at: EpochSecs,
}

#[derive(Debug)]
pub struct CreateSession {
    pub admin_id: DbId,
    pub token_hash: String,
    pub expires_at: EpochSecs,
}
