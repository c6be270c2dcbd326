//! Content-addressed blob storage for sepal.
//!
//! Blobs are identified solely by the hex-encoded SHA-256 of their bytes:
//! the hash is the key, computed by the caller and trusted by this layer.
//! The store classifies content by magic bytes at write time, serves reads
//! either by redirect (when a public base URL fronts the bucket) or by
//! buffering the object, and enumerates the bucket with the blob-key
//! filter applied.
//!
//! # Backends
//!
//! All backends implement the [`BlobStore`] trait:
//!
//! - [`S3BlobStore`] -- any S3-compatible object store (AWS, Tigris,
//!   MinIO, ...)
//! - [`InMemoryBlobStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. The store assigns no identifiers; callers supply the content hash.
//! 2. Storing to an existing hash overwrites; there is no versioning.
//! 3. The content type is advisory: derived from the first 512 bytes,
//!    never re-validated against the full payload.
//! 4. Operations are stateless per call; the only long-lived state is the
//!    immutable backend client handle.
//! 5. Backend failures are propagated with operation and key context,
//!    never retried and never swallowed. The two local recoveries are the
//!    advisory bucket check at startup and per-key metadata misses during
//!    enumeration.

pub mod config;
pub mod error;
pub mod memory;
pub mod s3;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::S3Config;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBlobStore;
pub use s3::S3BlobStore;
pub use traits::{BlobStore, Loaded};
