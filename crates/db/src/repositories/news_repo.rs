//! Repository for the `news` table.

use sitekit_core::types::{DbId, EpochSecs};
use sqlx::SqlitePool;

use crate::models::news::{NewsFields, NewsItem, NewsSummary};

const COLUMNS: &str = "id, title, summary, content, cover_image_url, publish_date, created_at";

/// Columns of the public list projection. `content` is deliberately absent.
const SUMMARY_COLUMNS: &str = "id, title, summary, cover_image_url, publish_date";

/// CRUD over news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// Full rows, newest first (admin view).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, NewsItem>(&query).fetch_all(pool).await
    }

    /// Reduced projection, newest first (public view).
    pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<NewsSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM news ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, NewsSummary>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = ?1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        fields: &NewsFields,
        now: EpochSecs,
    ) -> Result<NewsItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, summary, content, cover_image_url, publish_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(&fields.title)
            .bind(&fields.summary)
            .bind(&fields.content)
            .bind(&fields.cover_image_url)
            .bind(&fields.publish_date)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable column of a row. `created_at` is kept.
    ///
    /// Returns the number of affected rows; zero for an unknown id.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        fields: &NewsFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE news SET
                title = ?2,
                summary = ?3,
                content = ?4,
                cover_image_url = ?5,
                publish_date = ?6
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.summary)
        .bind(&fields.content)
        .bind(&fields.cover_image_url)
        .bind(&fields.publish_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a row. Returns the number of affected rows; zero for an unknown id.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
