//! SHA-256 hex digests and constant-time digest comparison.
//!
//! Used for legacy admin password digests, session token lookup, and blob
//! ETags.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Compare two digest strings without short-circuiting on the first
/// differing byte.
///
/// Hex digests are case-insensitive, so both sides are compared lowercased.
pub fn digest_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| {
            acc | (x.to_ascii_lowercase() ^ y.to_ascii_lowercase())
        })
        == 0
}
