use std::collections::HashMap;
use std::io::Cursor;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bytes::Bytes;
use sepal_types::{is_blob_key, BlobDescriptor};

use crate::config;
use crate::error::{StoreError, StoreResult};
use crate::traits::{BlobStore, Loaded};

#[derive(Clone)]
struct StoredBlob {
    data: Bytes,
    content_type: String,
    uploaded: i64,
}

/// In-memory, HashMap-based blob store.
///
/// Intended for tests and embedding. It follows the same contract as the
/// S3 backend: content type is sniffed at store time, loads honor redirect
/// mode, listings apply the blob-key filter, and deleting an absent key
/// succeeds (this backend's idempotent delete policy).
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, StoredBlob>>,
    public_url: Option<String>,
    service_url: String,
}

impl InMemoryBlobStore {
    /// Create an empty store serving blob URLs under `service_url`.
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
            public_url: None,
            service_url: service_url.into(),
        }
    }

    /// Enable redirect mode: loads answer with `{public_url}/{key}`.
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }

    /// Number of objects currently stored, blob or not.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Insert an object under an arbitrary key, bypassing sniffing.
    ///
    /// Buckets in the wild contain more than blobs; this lets tests plant
    /// non-blob keys and verify that listings exclude them.
    pub fn insert_raw(&self, key: impl Into<String>, data: Bytes, content_type: impl Into<String>) {
        let blob = StoredBlob {
            data,
            content_type: content_type.into(),
            uploaded: epoch_seconds(),
        };
        self.blobs
            .write()
            .expect("lock poisoned")
            .insert(key.into(), blob);
    }
}

fn epoch_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn store(&self, sha256: &str, data: Bytes) -> StoreResult<()> {
        let blob = StoredBlob {
            content_type: sepal_sniff::sniff(&data).to_string(),
            data,
            uploaded: epoch_seconds(),
        };
        // Overwrites silently: last write wins, as at the backend.
        self.blobs
            .write()
            .expect("lock poisoned")
            .insert(sha256.to_string(), blob);
        Ok(())
    }

    async fn load(&self, sha256: &str) -> StoreResult<Loaded> {
        if let Some(url) = config::redirect_url(self.public_url.as_deref(), sha256)? {
            return Ok(Loaded::Redirect(url));
        }

        let map = self.blobs.read().expect("lock poisoned");
        match map.get(sha256) {
            Some(blob) => Ok(Loaded::Stream(Cursor::new(blob.data.clone()))),
            None => Err(StoreError::not_found(sha256)),
        }
    }

    async fn delete(&self, sha256: &str) -> StoreResult<()> {
        self.blobs.write().expect("lock poisoned").remove(sha256);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<BlobDescriptor>> {
        let base_url = self.public_url.as_deref().unwrap_or(&self.service_url);
        let map = self.blobs.read().expect("lock poisoned");

        Ok(map
            .iter()
            .filter(|(key, _)| is_blob_key(key))
            .map(|(key, blob)| BlobDescriptor {
                sha256: key.clone(),
                size: blob.data.len() as u64,
                content_type: blob.content_type.clone(),
                url: config::blob_url(base_url, key),
                uploaded: blob.uploaded,
            })
            .collect())
    }
}
