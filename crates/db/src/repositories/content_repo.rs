//! Repository for the `site_content` table.

use sitekit_core::types::{DbId, EpochSecs};
use sqlx::SqlitePool;

use crate::models::content::{ContentEntry, SiteContent};

const COLUMNS: &str = "id, content_key, content_value, last_updated";

/// CRUD over site content rows.
pub struct ContentRepo;

impl ContentRepo {
    /// All rows, most recently updated first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<SiteContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_content ORDER BY last_updated DESC, id DESC"
        );
        sqlx::query_as::<_, SiteContent>(&query).fetch_all(pool).await
    }

    /// Key/value pairs for the public content map.
    pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<ContentEntry>, sqlx::Error> {
        sqlx::query_as::<_, ContentEntry>(
            "SELECT content_key, content_value FROM site_content ORDER BY content_key",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content WHERE id = ?1");
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a row.
    ///
    /// A duplicate `content_key` fails with a unique violation from the store
    /// (see [`crate::is_unique_violation`]); there is no existence pre-check.
    pub async fn create(
        pool: &SqlitePool,
        key: &str,
        value: &str,
        now: EpochSecs,
    ) -> Result<SiteContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_content (content_key, content_value, last_updated)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(key)
            .bind(value)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Set a row's value and stamp `last_updated`.
    ///
    /// The stamp never moves backwards, even if the clock does. Returns the
    /// number of affected rows; zero for an unknown id.
    pub async fn update_value(
        pool: &SqlitePool,
        id: DbId,
        value: &str,
        now: EpochSecs,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE site_content
             SET content_value = ?2, last_updated = MAX(last_updated, ?3)
             WHERE id = ?1",
        )
        .bind(id)
        .bind(value)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a row. Returns the number of affected rows; zero for an unknown id.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_content WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
