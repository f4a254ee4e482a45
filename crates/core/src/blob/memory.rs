use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{validate_key, BlobError, BlobMetadata, BlobStore, StoredBlob};

/// In-memory blob store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<BlobMetadata, BlobError> {
        validate_key(key)?;
        let metadata = BlobMetadata::for_bytes(&bytes, content_type);
        self.objects.write().await.insert(
            key.to_string(),
            StoredBlob {
                bytes,
                metadata: metadata.clone(),
            },
        );
        Ok(metadata)
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError> {
        Ok(self.objects.read().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trip_and_count() {
        let store = MemoryBlobStore::new();
        assert!(store.is_empty().await);

        store.put("a", b"xyz".to_vec(), "text/plain").await.unwrap();
        assert_eq!(store.len().await, 1);

        let blob = store.get("a").await.unwrap().unwrap();
        assert_eq!(blob.bytes, b"xyz");
        assert_eq!(blob.metadata.size, 3);
        assert!(store.get("b").await.unwrap().is_none());
    }
}
