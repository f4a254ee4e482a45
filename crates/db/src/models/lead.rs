//! Contact lead model and DTOs.

use serde::{Deserialize, Serialize};
use sitekit_core::types::{DbId, EpochSecs};
use sqlx::FromRow;

/// Full row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub created_at: EpochSecs,
}

/// Public contact-form submission. `name` and `phone` are required.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLead {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

/// Validated insert values for a lead.
#[derive(Debug)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}
