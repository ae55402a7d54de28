//! Event handling: one storage-change notification in, two thumbnails and
//! one record update out.
//!
//! Failure at any step aborts the invocation with the error re-raised, so
//! the platform's redelivery and dead-letter policy applies. No step is
//! compensated; re-running the whole invocation converges because every
//! written value is a deterministic function of the original object.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use bytes::Bytes;
use error_types::AppError;
use object_store::{ObjectIdentity, ObjectStore};
use record_store::UploadRecords;
use tracing::{error, info, warn};

use crate::paths::{
    decode_object_key, is_thumbnail_key, thumbnail_key, THUMB_LARGE_WIDTH, THUMB_SMALL_WIDTH,
};
use crate::processor::ThumbnailProcessor;

/// Bucket and decoded key of the single created object a notification
/// describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    pub bucket: String,
    pub key: String,
}

/// Extracts the target object from a notification. Returns `None` for an
/// empty event or a record missing its bucket or key; there is nothing to
/// process in either case.
pub fn notification_target(event: &S3Event) -> Option<NotificationTarget> {
    let record = event.records.first()?;
    let bucket = record.s3.bucket.name.as_deref()?;
    let key = record.s3.object.key.as_deref()?;

    Some(NotificationTarget {
        bucket: bucket.to_string(),
        key: decode_object_key(key),
    })
}

/// Per-process worker holding the service handles.
pub struct ThumbnailWorker {
    s3: aws_sdk_s3::Client,
    records: UploadRecords,
    processor: Arc<ThumbnailProcessor>,
}

impl ThumbnailWorker {
    pub fn new(
        s3: aws_sdk_s3::Client,
        records: UploadRecords,
        processor: ThumbnailProcessor,
    ) -> Self {
        Self {
            s3,
            records,
            processor: Arc::new(processor),
        }
    }

    /// Handles one invocation end to end.
    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, event: S3Event) -> error_types::Result<()> {
        let Some(target) = notification_target(&event) else {
            warn!("notification carries no processable record");
            return Ok(());
        };

        // A derived write must not re-trigger the pipeline.
        if is_thumbnail_key(&target.key) {
            info!(key = %target.key, "object is already a thumbnail, skipping");
            return Ok(());
        }

        info!(bucket = %target.bucket, key = %target.key, "processing original upload");

        match self.process(&target).await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(
                    bucket = %target.bucket,
                    key = %target.key,
                    error = %err,
                    "thumbnail generation failed"
                );
                Err(err)
            }
        }
    }

    async fn process(&self, target: &NotificationTarget) -> error_types::Result<()> {
        let store = ObjectStore::new(self.s3.clone(), &target.bucket);

        let fetched = store.get(&target.key).await?;
        let identity = ObjectIdentity::from_metadata(&fetched.metadata)?;

        let thumb_small_key = thumbnail_key(THUMB_SMALL_WIDTH, &target.key);
        let thumb_large_key = thumbnail_key(THUMB_LARGE_WIDTH, &target.key);

        // The two variants are independent; generate and write them
        // concurrently and join before the record update.
        tokio::try_join!(
            self.generate_and_store(&store, fetched.body.clone(), THUMB_SMALL_WIDTH, &thumb_small_key),
            self.generate_and_store(&store, fetched.body, THUMB_LARGE_WIDTH, &thumb_large_key),
        )?;

        self.records
            .mark_done(
                &identity.owner_id,
                &identity.item_id,
                &thumb_small_key,
                &thumb_large_key,
            )
            .await?;

        info!(
            owner_id = %identity.owner_id,
            item_id = %identity.item_id,
            thumb_small_key = %thumb_small_key,
            thumb_large_key = %thumb_large_key,
            "upload record marked done"
        );

        Ok(())
    }

    async fn generate_and_store(
        &self,
        store: &ObjectStore,
        original: Bytes,
        width: u32,
        key: &str,
    ) -> error_types::Result<()> {
        let data = self
            .processor
            .clone()
            .generate_async(original, width)
            .await
            .map_err(AppError::from)?;

        store.put(key, data, "image/jpeg").await?;
        info!(key = %key, width, "thumbnail stored");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_for_key(key: &str) -> S3Event {
        let payload = serde_json::json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2026-01-01T00:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "userIdentity": { "principalId": "AWS:EXAMPLE" },
                "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                "responseElements": {
                    "x-amz-request-id": "C3D13FE58DE4C810",
                    "x-amz-id-2": "FMyUVURIY8="
                },
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "uploads",
                    "bucket": {
                        "name": "image-uploads",
                        "ownerIdentity": { "principalId": "EXAMPLE" },
                        "arn": "arn:aws:s3:::image-uploads"
                    },
                    "object": {
                        "key": key,
                        "size": 1024,
                        "eTag": "d41d8cd98f00b204e9800998ecf8427e",
                        "sequencer": "0055AED6DCD90281E5"
                    }
                }
            }]
        });
        serde_json::from_value(payload).expect("valid S3 event payload")
    }

    #[test]
    fn target_carries_bucket_and_decoded_key() {
        let event = event_for_key("uploads/my+photo%281%29.jpg");
        let target = notification_target(&event).unwrap();
        assert_eq!(target.bucket, "image-uploads");
        assert_eq!(target.key, "uploads/my photo(1).jpg");
    }

    #[test]
    fn empty_event_has_no_target() {
        let event = S3Event { records: vec![] };
        assert!(notification_target(&event).is_none());
    }

    #[test]
    fn thumbnail_keys_are_skipped_before_any_fetch() {
        let event = event_for_key("thumbnails/200/photo.jpg");
        let target = notification_target(&event).unwrap();
        assert!(is_thumbnail_key(&target.key));
    }

    #[test]
    fn derived_keys_are_stable_across_invocations() {
        let event = event_for_key("uploads/photo.jpg");
        let first = notification_target(&event).unwrap();
        let second = notification_target(&event).unwrap();

        assert_eq!(
            thumbnail_key(THUMB_SMALL_WIDTH, &first.key),
            thumbnail_key(THUMB_SMALL_WIDTH, &second.key)
        );
        assert_eq!(
            thumbnail_key(THUMB_LARGE_WIDTH, &first.key),
            "thumbnails/400/photo.jpg"
        );
    }
}
