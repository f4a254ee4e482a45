//! Shared response bodies for API handlers.
//!
//! Mutating admin endpoints and the public lead form answer with
//! `{"success": true}`; uploads add the retrieval `url`.

use serde::Serialize;

/// `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "url": "/api/images/<key>" }` returned by uploads.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}
