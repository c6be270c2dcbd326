use std::io::Cursor;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use sepal_types::{is_blob_key, BlobDescriptor};

use crate::config::S3Config;
use crate::error::{StoreError, StoreResult};
use crate::traits::{BlobStore, Loaded};

/// Blob store backed by an S3-compatible object store.
///
/// Keys are blob hashes, verbatim. The client handle is built once at
/// construction and shared read-only across all calls; the store itself
/// holds no other state.
pub struct S3BlobStore {
    client: Client,
    config: S3Config,
}

impl S3BlobStore {
    /// Build the SDK client and verify bucket access.
    ///
    /// The bucket check is advisory: a failure (transient network issue at
    /// boot, or a permissions model that denies HeadBucket but allows
    /// object operations) is logged and construction still succeeds.
    pub async fn connect(config: S3Config) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "sepal-static",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(config.endpoint.clone())
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(false)
            .build();
        let client = Client::from_conf(s3_config);

        if let Err(e) = client.head_bucket().bucket(&config.bucket).send().await {
            tracing::warn!(
                bucket = %config.bucket,
                error = %e,
                "could not verify bucket access"
            );
        }

        tracing::info!(
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            "S3 blob storage initialized"
        );

        Self { client, config }
    }

    /// Content type recorded on `key`, via a metadata-only lookup.
    ///
    /// A miss here must not abort an enumeration, so failures and absent
    /// types both degrade to the generic fallback.
    async fn head_content_type(&self, key: &str) -> String {
        match self
            .client
            .head_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(head) => head
                .content_type()
                .unwrap_or(sepal_sniff::OCTET_STREAM)
                .to_string(),
            Err(e) => {
                tracing::debug!(
                    key = %key,
                    error = %e,
                    "metadata lookup failed, using fallback content type"
                );
                sepal_sniff::OCTET_STREAM.to_string()
            }
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn store(&self, sha256: &str, data: Bytes) -> StoreResult<()> {
        let content_type = sepal_sniff::sniff(&data);
        let size = data.len();

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(sha256)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StoreError::write("put", sha256, e))?;

        tracing::debug!(key = %sha256, size, content_type, "stored blob");
        Ok(())
    }

    async fn load(&self, sha256: &str) -> StoreResult<Loaded> {
        // Redirect mode: hand back a pointer into the public endpoint and
        // read nothing, so bytes are not proxied twice.
        if let Some(url) = self.config.redirect_url(sha256)? {
            tracing::debug!(key = %sha256, target = %url, "redirecting blob load");
            return Ok(Loaded::Redirect(url));
        }

        let object = match self
            .client
            .get_object()
            .bucket(&self.config.bucket)
            .key(sha256)
            .send()
            .await
        {
            Ok(object) => object,
            Err(e) => {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    return Err(StoreError::not_found(sha256));
                }
                return Err(StoreError::read("get", sha256, e));
            }
        };

        // Buffered rather than streamed: the whole object is read up front
        // in exchange for a seekable reader.
        let data = object
            .body
            .collect()
            .await
            .map_err(|e| StoreError::read("get", sha256, e))?
            .into_bytes();

        Ok(Loaded::Stream(Cursor::new(data)))
    }

    async fn delete(&self, sha256: &str) -> StoreResult<()> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(sha256)
            .send()
            .await
            .map_err(|e| StoreError::write("delete", sha256, e))?;

        tracing::debug!(key = %sha256, "deleted blob");
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<BlobDescriptor>> {
        let mut blobs = Vec::new();

        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.config.bucket)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page =
                page.map_err(|e| StoreError::read("list", self.config.bucket.clone(), e))?;

            for object in page.contents() {
                let Some(key) = object.key() else {
                    continue;
                };
                if !is_blob_key(key) {
                    continue;
                }

                let content_type = self.head_content_type(key).await;

                blobs.push(BlobDescriptor {
                    sha256: key.to_string(),
                    size: object.size().unwrap_or(0).max(0) as u64,
                    content_type,
                    url: self.config.blob_url(key),
                    uploaded: object.last_modified().map(|t| t.secs()).unwrap_or(0),
                });
            }
        }

        Ok(blobs)
    }
}
