//! Repository for the `leads` table.

use sitekit_core::types::EpochSecs;
use sqlx::SqlitePool;

use crate::models::lead::{Lead, NewLead};

const COLUMNS: &str = "id, name, phone, company, message, created_at";

/// Leads are insert-only; admins read them back as a list.
pub struct LeadRepo;

impl LeadRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &NewLead,
        now: EpochSecs,
    ) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, phone, company, message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.message)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// All leads, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
