use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

mod get;
mod identity;
mod presign;
mod put;

pub use identity::{ObjectIdentity, METADATA_ITEM_ID, METADATA_OWNER_ID};

/// A stored object's bytes together with its write-time metadata.
///
/// Metadata keys arrive lowercased; the storage layer case-normalizes them.
#[derive(Debug)]
pub struct FetchedObject {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Thin wrapper around the S3 client, scoped to a single bucket.
#[derive(Clone, Debug)]
pub struct ObjectStore {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl ObjectStore {
    pub fn new(inner: aws_sdk_s3::Client, bucket: &str) -> Self {
        Self {
            inner,
            bucket: bucket.to_string(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Retrieves the object at `key` along with its attached metadata.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, key: &str) -> anyhow::Result<FetchedObject> {
        get::get(&self.inner, &self.bucket, key).await
    }

    /// Writes `body` to `key` with the given content type.
    #[tracing::instrument(skip(self, body))]
    pub async fn put(&self, key: &str, body: Bytes, content_type: &str) -> anyhow::Result<()> {
        put::put(&self.inner, &self.bucket, key, body, content_type).await
    }

    /// Presigned GET URL for `key`, valid for `expires_in`.
    #[tracing::instrument(skip(self))]
    pub async fn presign_get(&self, key: &str, expires_in: Duration) -> anyhow::Result<String> {
        presign::presign_get(&self.inner, &self.bucket, key, expires_in).await
    }

    /// Presigned PUT URL scoped to `key`, `content_type` and the attached
    /// metadata. Including the metadata in the signature means an upload
    /// that omits it fails at the storage layer instead of stranding its
    /// record downstream.
    #[tracing::instrument(skip(self))]
    pub async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        metadata: &HashMap<String, String>,
        expires_in: Duration,
    ) -> anyhow::Result<String> {
        presign::presign_put(&self.inner, &self.bucket, key, content_type, metadata, expires_in)
            .await
    }
}
