//! Repository for the `admins` table.

use sqlx::SqlitePool;

use crate::models::admin::{Admin, CreateAdmin};

const COLUMNS: &str = "id, username, password_hash, created_at";

/// Lookup and out-of-band seeding of admin accounts.
pub struct AdminRepo;

impl AdminRepo {
    /// Find an admin by username (case-sensitive).
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE username = ?1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Insert an admin unless the username is already taken.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn create_if_absent(
        pool: &SqlitePool,
        input: &CreateAdmin,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO admins (username, password_hash) VALUES (?1, ?2)
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(&input.username)
        .bind(&input.password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
