use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{validate_key, BlobError, BlobMetadata, BlobStore, StoredBlob};

/// Suffix of the JSON sidecar that holds a blob's metadata.
pub(super) const METADATA_SUFFIX: &str = ".meta.json";

/// Filesystem-backed blob store.
///
/// Each key maps to `<root>/<key>` with metadata in `<root>/<key>.meta.json`.
/// The data file is written before the sidecar, so a blob without a sidecar
/// is treated as absent.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!(root = %root.display(), "Blob store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn metadata_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}{METADATA_SUFFIX}"))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<BlobMetadata, BlobError> {
        validate_key(key)?;
        let metadata = BlobMetadata::for_bytes(&bytes, content_type);

        tokio::fs::write(self.data_path(key), &bytes).await?;
        tokio::fs::write(self.metadata_path(key), serde_json::to_vec(&metadata)?).await?;

        tracing::debug!(key, size = metadata.size, "Blob stored");
        Ok(metadata)
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError> {
        if validate_key(key).is_err() {
            return Ok(None);
        }

        let raw_meta = match tokio::fs::read(self.metadata_path(key)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let metadata: BlobMetadata = serde_json::from_slice(&raw_meta)?;

        let bytes = match tokio::fs::read(self.data_path(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(StoredBlob { bytes, metadata }))
    }
}
