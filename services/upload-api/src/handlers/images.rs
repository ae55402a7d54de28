//! Listing: the caller's upload records, with short-lived read URLs
//! attached to finished thumbnails.

use futures::future::try_join_all;
use record_store::{UploadRecord, UploadStatus};
use tracing::info;

use crate::config::READ_URL_TTL;
use crate::handlers::AppState;
use crate::models::{ImageView, ListImagesResponse};

/// Thumbnail keys eligible for signing. Only `done` records get URLs;
/// records still processing are returned as-is and polled by the client.
fn signable_keys(record: &UploadRecord) -> Option<(Option<String>, Option<String>)> {
    if record.status != UploadStatus::Done {
        return None;
    }
    Some((record.thumb_small_key.clone(), record.thumb_large_key.clone()))
}

/// Lists all uploads owned by the caller.
#[tracing::instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn list_images(
    state: &AppState,
    owner_id: &str,
) -> error_types::Result<ListImagesResponse> {
    let records = state.records.list_by_owner(owner_id).await?;
    info!(count = records.len(), "listing uploads");

    let views = try_join_all(records.into_iter().map(|record| view_of(state, record)));

    Ok(ListImagesResponse {
        images: views.await?,
    })
}

async fn view_of(state: &AppState, record: UploadRecord) -> error_types::Result<ImageView> {
    let mut thumb_small_url = None;
    let mut thumb_large_url = None;

    if let Some((small_key, large_key)) = signable_keys(&record) {
        if let Some(key) = small_key {
            thumb_small_url = Some(state.store.presign_get(&key, READ_URL_TTL).await?);
        }
        if let Some(key) = large_key {
            thumb_large_url = Some(state.store.presign_get(&key, READ_URL_TTL).await?);
        }
    }

    Ok(ImageView {
        record,
        thumb_small_url,
        thumb_large_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: UploadStatus, with_keys: bool) -> UploadRecord {
        UploadRecord {
            owner_id: "u1".into(),
            item_id: "i1".into(),
            original_key: "uploads/i1.jpg".into(),
            original_file_name: "photo.jpg".into(),
            thumb_small_key: with_keys.then(|| "thumbnails/200/photo.jpg".into()),
            thumb_large_key: with_keys.then(|| "thumbnails/400/photo.jpg".into()),
            status,
            created_at: 0,
        }
    }

    #[test]
    fn processing_records_get_no_urls() {
        assert!(signable_keys(&record(UploadStatus::Processing, false)).is_none());
        // Even with keys present, a non-done record is never signed.
        assert!(signable_keys(&record(UploadStatus::Processing, true)).is_none());
    }

    #[test]
    fn done_records_expose_both_keys() {
        let (small, large) = signable_keys(&record(UploadStatus::Done, true)).unwrap();
        assert_eq!(small.as_deref(), Some("thumbnails/200/photo.jpg"));
        assert_eq!(large.as_deref(), Some("thumbnails/400/photo.jpg"));
    }
}
