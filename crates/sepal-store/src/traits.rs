use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use sepal_types::BlobDescriptor;
use url::Url;

use crate::error::StoreResult;

/// Outcome of a successful [`BlobStore::load`].
///
/// Exactly one of the two forms is produced, never both: either the caller
/// is redirected to an externally reachable copy of the blob, or the bytes
/// themselves are handed back. Modeling this as a sum type makes the
/// mutual exclusivity a compile-time property.
#[derive(Debug)]
pub enum Loaded {
    /// Fetch the blob from this URL instead; no bytes were read from the
    /// backend. Produced whenever a public base URL is configured.
    Redirect(Url),
    /// The blob's full contents, buffered into a seekable in-memory reader.
    Stream(Cursor<Bytes>),
}

impl Loaded {
    /// Returns the redirect target, if this is a redirect.
    pub fn redirect(&self) -> Option<&Url> {
        match self {
            Self::Redirect(url) => Some(url),
            Self::Stream(_) => None,
        }
    }

    /// Consumes a stream outcome, returning the buffered bytes.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Self::Redirect(_) => None,
            Self::Stream(cursor) => Some(cursor.into_inner()),
        }
    }
}

/// Content-addressed blob storage.
///
/// Blobs carry no assigned identifier: `sha256` is the lowercase-hex
/// SHA-256 of the bytes, computed by the caller. This layer trusts it and
/// never re-hashes the payload.
///
/// All implementations must satisfy these invariants:
/// - `sha256` is unique per store; storing to an existing key overwrites
///   the prior bytes and metadata without warning.
/// - Operations are stateless per call and safe to invoke concurrently,
///   including for the same key. Same-key write races resolve to
///   last-write-wins at the backend; this layer adds no locking.
/// - Backend failures are propagated, never retried and never swallowed.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under its content address.
    ///
    /// The content type is sniffed from the leading bytes and attached as
    /// object metadata so listings can recover it later.
    async fn store(&self, sha256: &str, data: Bytes) -> StoreResult<()>;

    /// Retrieve a blob, either as a redirect or as buffered bytes.
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent. The
    /// buffering path reads the whole object before returning; callers
    /// serving very large blobs should bound their concurrent loads.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn load(&self, sha256: &str) -> StoreResult<Loaded>;

    /// Delete a blob.
    ///
    /// Idempotence is inherited from the backend: deleting an absent key
    /// is not guaranteed to be reported as an error, and no existence
    /// check is added here.
    async fn delete(&self, sha256: &str) -> StoreResult<()>;

    /// Enumerate every blob in the store.
    ///
    /// Pages through the full backend key space, keeping only keys that
    /// look like blob keys (64 hex characters) and silently skipping
    /// anything else sharing the bucket. Ordering follows backend
    /// enumeration order. Costs one metadata round-trip per listed key,
    /// so this is O(n) backend calls; results are recomputed on every
    /// call, never cached.
    async fn list(&self) -> StoreResult<Vec<BlobDescriptor>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_accessors() {
        let url = Url::parse("https://cdn.example/abc").unwrap();
        let loaded = Loaded::Redirect(url.clone());
        assert_eq!(loaded.redirect(), Some(&url));
        assert!(loaded.into_bytes().is_none());
    }

    #[test]
    fn stream_accessors() {
        let loaded = Loaded::Stream(Cursor::new(Bytes::from_static(b"payload")));
        assert!(loaded.redirect().is_none());
        assert_eq!(loaded.into_bytes().unwrap().as_ref(), b"payload");
    }

    #[test]
    fn stream_is_seekable() {
        use std::io::{Read, Seek, SeekFrom};

        let loaded = Loaded::Stream(Cursor::new(Bytes::from_static(b"0123456789")));
        let Loaded::Stream(mut cursor) = loaded else {
            panic!("expected stream");
        };
        cursor.seek(SeekFrom::Start(5)).unwrap();
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "56789");
    }
}
