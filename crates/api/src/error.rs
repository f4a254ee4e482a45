//! HTTP error type and its JSON rendering.
//!
//! Every failure leaves the server as `{"error": <message>, "code": <CODE>}`.
//! Server-side faults are logged in full and rendered with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sitekit_core::blob::BlobError;
use sitekit_core::error::CoreError;

/// Message sent in place of any 500 detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error returned by handlers and extractors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure from `sitekit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Record store failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Blob store failure.
    #[error("Blob store error: {0}")]
    Blob(#[from] BlobError),

    /// Missing resource addressed by something other than a numeric id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request outside field validation (multipart framing etc.).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Extractor rejection (malformed JSON, bad path or query parameter,
    /// wrong content type), keeping axum's status.
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },

    /// Request body over the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Server-side fault with a message for the log.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The 401 used by the auth extractor and the login handler.
    pub fn unauthorized(msg: &str) -> Self {
        AppError::Core(CoreError::Unauthorized(msg.to_string()))
    }

    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::Blob(BlobError::InvalidKey(key)) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Invalid file name '{key}'"),
            ),
            AppError::Blob(err) => {
                tracing::error!(error = %err, "Blob store failure");
                internal_parts()
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Rejected { status, message } => {
                (*status, rejection_code(*status), message.clone())
            }
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Handler failure");
                internal_parts()
            }
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

fn rejection_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        s if s.is_server_error() => "INTERNAL_ERROR",
        _ => "BAD_REQUEST",
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} {id} does not exist"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Domain failure");
            internal_parts()
        }
    }
}

/// Unique violations are the caller's fault (409); a missing row is 404.
/// Anything else is logged and hidden.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if sitekit_db::is_unique_violation(err) {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            "Value already exists".to_string(),
        );
    }
    if matches!(err, sqlx::Error::RowNotFound) {
        return (StatusCode::NOT_FOUND, "NOT_FOUND", "Record not found".to_string());
    }
    tracing::error!(error = %err, "Record store failure");
    internal_parts()
}

fn internal_parts() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
