//! Shared query parameter types for API handlers.

use serde::Deserialize;
use sitekit_core::types::DbId;

/// Optional `?id=` selector, used where the id travels in the query string
/// instead of the path.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<DbId>,
}
