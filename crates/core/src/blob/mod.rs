//! Blob Store abstraction for uploaded media.
//!
//! Objects are addressed by an opaque key and carry a small metadata record
//! (content type, ETag, size). Backends:
//!
//! - [`LocalBlobStore`] -- one file per key under a root directory.
//! - [`MemoryBlobStore`] -- process-local map, used by tests.

mod local;
mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;

use crate::hashing::sha256_hex;

/// Errors raised by blob store backends.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),

    #[error("Blob store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt blob metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Metadata stored alongside every blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobMetadata {
    pub content_type: String,
    /// Hex SHA-256 of the stored bytes (unquoted).
    pub etag: String,
    pub size: u64,
}

impl BlobMetadata {
    /// Derive metadata for `bytes` with the given content type.
    pub fn for_bytes(bytes: &[u8], content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            etag: sha256_hex(bytes),
            size: bytes.len() as u64,
        }
    }
}

/// A blob read back from the store.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub bytes: Vec<u8>,
    pub metadata: BlobMetadata,
}

/// Object storage for uploaded files.
///
/// `put` overwrites an existing key. `get` returns `Ok(None)` for an
/// unknown key, including keys that could never have been written.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<BlobMetadata, BlobError>;

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError>;
}

/// Check that `key` is a single, non-empty path segment.
pub fn validate_key(key: &str) -> Result<(), BlobError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0'])
        || key.ends_with(local::METADATA_SUFFIX);
    if bad {
        return Err(BlobError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn plain_keys_are_valid() {
        assert!(validate_key("1700000000000-logo.png").is_ok());
        assert!(validate_key("a..b").is_ok());
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for key in ["", ".", "..", "../etc/passwd", "a/b", "a\\b", "x.meta.json"] {
            assert_matches!(validate_key(key), Err(BlobError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[test]
    fn metadata_for_bytes() {
        let meta = BlobMetadata::for_bytes(b"", "image/png");
        assert_eq!(meta.size, 0);
        assert_eq!(meta.content_type, "image/png");
        assert_eq!(
            meta.etag,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
