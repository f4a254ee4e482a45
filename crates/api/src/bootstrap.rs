//! Out-of-band admin seeding.
//!
//! The HTTP surface never creates admins. When `ADMIN_USERNAME` and
//! `ADMIN_PASSWORD` are configured, startup inserts that account if the
//! username is free; an existing row is left untouched.

use sitekit_db::models::admin::CreateAdmin;
use sitekit_db::repositories::AdminRepo;
use sitekit_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Seed `seed` into the `admins` table. Returns `true` if a row was inserted.
pub async fn seed_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<bool> {
    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let inserted = AdminRepo::create_if_absent(
        pool,
        &CreateAdmin {
            username: seed.username.clone(),
            password_hash,
        },
    )
    .await?;

    if inserted {
        tracing::info!(username = %seed.username, "Seeded admin account");
    } else {
        tracing::debug!(username = %seed.username, "Admin account already present");
    }
    Ok(inserted)
}
