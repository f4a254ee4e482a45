//! Repository for the `admin_sessions` table.

use sitekit_core::types::{DbId, EpochSecs};
use sqlx::SqlitePool;

use crate::models::session::{AdminSession, CreateSession};

const COLUMNS: &str = "id, admin_id, token_hash, expires_at, created_at";

/// Store-backed admin sessions keyed by token digest.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateSession,
    ) -> Result<AdminSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions (admin_id, token_hash, expires_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(input.admin_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token digest that has not expired at `now`.
    pub async fn find_live(
        pool: &SqlitePool,
        token_hash: &str,
        now: EpochSecs,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE token_hash = ?1 AND expires_at > ?2"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token_hash)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete one session. Returns `true` if a row was removed.
    pub async fn revoke(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions that expired at or before `now`. Returns the count.
    pub async fn cleanup_expired(pool: &SqlitePool, now: EpochSecs) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= ?1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
