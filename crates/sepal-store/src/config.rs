use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{StoreError, StoreResult};

/// Configuration for the S3-compatible backend.
///
/// Owned by the embedding service; this crate does not read the
/// environment. `public_url` is what enables redirect mode: when set,
/// loads answer with a pointer into the CDN or public bucket endpoint
/// instead of proxying bytes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct S3Config {
    /// Object-store endpoint, e.g. `https://fly.storage.tigris.dev`.
    pub endpoint: String,
    /// Bucket holding the blobs.
    pub bucket: String,
    /// Region; S3-compatible providers commonly accept `auto`.
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Public base URL fronting the bucket. Enables redirect mode.
    pub public_url: Option<String>,
    /// Base URL of the serving layer itself; used for blob URLs when no
    /// public URL is configured.
    pub service_url: String,
}

impl S3Config {
    /// Base URL used when deriving blob locations.
    pub fn base_url(&self) -> &str {
        self.public_url.as_deref().unwrap_or(&self.service_url)
    }

    /// Location of a blob: `{base_url}/{key}`.
    pub fn blob_url(&self, key: &str) -> String {
        blob_url(self.base_url(), key)
    }

    /// Redirect target for a blob, when redirect mode is enabled.
    pub fn redirect_url(&self, key: &str) -> StoreResult<Option<Url>> {
        redirect_url(self.public_url.as_deref(), key)
    }
}

/// Location of a blob under a base URL.
pub(crate) fn blob_url(base_url: &str, key: &str) -> String {
    format!("{base_url}/{key}")
}

/// Redirect target for a blob: `Some` only when a public base URL is set.
///
/// A configured-but-unparseable public URL is a configuration error,
/// surfaced at call time rather than silently defaulted.
pub(crate) fn redirect_url(public_url: Option<&str>, key: &str) -> StoreResult<Option<Url>> {
    let Some(public) = public_url else {
        return Ok(None);
    };
    let target = blob_url(public, key);
    let url = Url::parse(&target)
        .map_err(|e| StoreError::Configuration(format!("bad redirect URL {target:?}: {e}")))?;
    Ok(Some(url))
}
