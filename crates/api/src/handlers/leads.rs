//! Handlers for contact leads: public submission and admin listing.

use axum::extract::State;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_core::types::now_epoch_secs;
use sitekit_core::validation::{non_empty, or_empty};
use sitekit_db::models::lead::{CreateLead, Lead, NewLead};
use sitekit_db::repositories::LeadRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AdminAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/leads
///
/// Public contact form. `name` and `phone` are required; `company` and
/// `message` default to the empty string.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLead>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(name), Some(phone)) = (
        non_empty(input.name),
        non_empty(input.phone),
    ) else {
        return Err(CoreError::Validation("Name and phone are required".into()).into());
    };

    let lead = NewLead {
        name,
        phone,
        company: or_empty(input.company),
        message: or_empty(input.message),
    };
    let row = LeadRepo::create(&state.pool, &lead, now_epoch_secs()).await?;

    tracing::info!(id = row.id, "Lead received");
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/admin/leads
///
/// All leads, newest first.
pub async fn list(State(state): State<AppState>, _admin: AdminAuth) -> AppResult<Json<Vec<Lead>>> {
    let leads = LeadRepo::list(&state.pool).await?;
    Ok(Json(leads))
}
