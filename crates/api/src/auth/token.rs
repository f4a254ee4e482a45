//! Bearer header parsing and opaque session tokens.
//!
//! A session token is 32 random bytes, hex-encoded, handed to the client
//! once. Only its SHA-256 hex digest is stored, so a leaked `admin_sessions`
//! table does not yield usable credentials.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use rand::Rng;
use sitekit_core::hashing::sha256_hex;

/// Number of random bytes in a session token.
pub const TOKEN_BYTES: usize = 32;

/// Literal scheme prefix of a bearer credential.
const BEARER_PREFIX: &str = "Bearer ";

/// Auth gate: return the credential from an `Authorization: Bearer <x>`
/// header, or `None` when the header is absent, not UTF-8, or lacks the
/// exact `Bearer ` prefix.
///
/// This checks shape only. Whether the credential names a live session is
/// decided by [`crate::middleware::auth::AdminAuth`].
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

/// Generate a fresh session token.
///
/// Returns `(plaintext_hex, sha256_hex_hash)`. The plaintext goes to the
/// client; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);

    let plaintext: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    sha256_hex(token.as_bytes())
}
