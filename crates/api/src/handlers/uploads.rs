//! Handlers for media upload and public retrieval.

use axum::body::Body;
use axum::extract::multipart::MultipartError;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use sitekit_core::upload::{public_url, sanitize_file_name, storage_key, DEFAULT_CONTENT_TYPE};

use crate::error::{AppError, AppResult};
use crate::extract::{AppMultipart, AppPath};
use crate::middleware::auth::AdminAuth;
use crate::response::UploadResponse;
use crate::state::AppState;

/// Multipart field that carries the file.
const FILE_FIELD: &str = "file";

/// Stored objects never change under a key, so clients may cache them forever.
const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// An uploaded file fully buffered in memory.
struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/admin/upload
///
/// Accepts multipart form data with a `file` field. The file is stored under
/// `<epoch-millis>-<file name>` and the response carries its public URL.
pub async fn upload(
    State(state): State<AppState>,
    admin: AdminAuth,
    AppMultipart(mut multipart): AppMultipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue; // ignore unknown fields
        }

        let file_name = sanitize_file_name(field.file_name().unwrap_or_default())?;
        let content_type = field
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        file = Some(UploadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let file = file.ok_or_else(|| AppError::BadRequest("File not found".into()))?;

    let key = storage_key(&file.file_name);
    let metadata = state
        .blobs
        .put(&key, file.bytes, &file.content_type)
        .await?;

    tracing::info!(
        admin_id = admin.admin_id,
        %key,
        size = metadata.size,
        content_type = %metadata.content_type,
        "File uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        url: public_url(&key),
    }))
}

/// Keep the body-limit rejection distinct from malformed form data.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// GET /api/images/{key}
///
/// Stream a stored object back with its content type and a strong ETag.
/// A matching `If-None-Match` yields 304 without a body.
pub async fn get_image(
    State(state): State<AppState>,
    AppPath(key): AppPath<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let Some(blob) = state.blobs.get(&key).await? else {
        return Err(AppError::NotFound("Object Not Found".into()));
    };

    let etag = format!("\"{}\"", blob.metadata.etag);
    let etag_value =
        HeaderValue::from_str(&etag).map_err(|e| AppError::InternalError(e.to_string()))?;
    let content_type = HeaderValue::from_str(&blob.metadata.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    let not_modified = headers
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| etag_matches(v, &blob.metadata.etag));

    if not_modified {
        return Ok((
            StatusCode::NOT_MODIFIED,
            [
                (ETAG, etag_value),
                (CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
            ],
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, content_type),
            (ETAG, etag_value),
            (CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
        ],
        Body::from(blob.bytes),
    )
        .into_response())
}

/// True when an `If-None-Match` header value names `etag` (unquoted) or is `*`.
///
/// Weak validators (`W/"..."`) compare equal to their strong form, as the
/// weak comparison function requires for `If-None-Match`.
fn etag_matches(header: &str, etag: &str) -> bool {
    header.split(',').map(str::trim).any(|candidate| {
        if candidate == "*" {
            return true;
        }
        let candidate = candidate.strip_prefix("W/").unwrap_or(candidate);
        candidate.trim_matches('"') == etag
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_matching() {
        assert!(etag_matches("\"abc\"", "abc"));
        assert!(etag_matches("W/\"abc\"", "abc"));
        assert!(etag_matches("\"x\", \"abc\"", "abc"));
        assert!(etag_matches("*", "abc"));
        assert!(!etag_matches("\"abcd\"", "abc"));
        assert!(!etag_matches("", "abc"));
    }
}
