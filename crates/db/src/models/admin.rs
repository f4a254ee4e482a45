//! Admin account model.

use sitekit_core::types::{DbId, EpochSecs};
use sqlx::FromRow;

/// Full row from the `admins` table.
///
/// Carries the password hash, so it is never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: EpochSecs,
}

/// DTO for seeding an admin outside the HTTP surface.
#[derive(Debug)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
}
