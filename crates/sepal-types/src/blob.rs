use serde::{Deserialize, Serialize};

/// Listing record for one stored blob.
///
/// This is the shape the HTTP layer serializes straight to JSON, so the
/// field names follow the wire contract: `sha256`, `size`, `type`, `url`,
/// `uploaded`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobDescriptor {
    /// Hex-encoded SHA-256 of the blob's bytes; the sole identifier.
    pub sha256: String,
    /// Byte length, as reported by the backend.
    pub size: u64,
    /// Advisory MIME type, sniffed at store time from the first 512 bytes.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Public location of the blob: `{base_url}/{sha256}`.
    pub url: String,
    /// Last-modified time as Unix epoch seconds, as reported by the backend.
    pub uploaded: i64,
}
