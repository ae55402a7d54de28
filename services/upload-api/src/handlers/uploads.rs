//! Upload coordination: issue a presigned PUT URL and pre-create the
//! record in `processing`.

use chrono::Utc;
use error_types::AppError;
use object_store::ObjectIdentity;
use record_store::{UploadRecord, UploadStatus};
use tracing::info;
use uuid::Uuid;

use crate::config::UPLOAD_URL_TTL;
use crate::handlers::AppState;
use crate::models::{UploadUrlRequest, UploadUrlResponse};

/// Namespace for original uploads.
const UPLOAD_PREFIX: &str = "uploads/";

/// Validates the request body. Both fields are required; nothing is written
/// before this check passes.
pub fn validate(req: &UploadUrlRequest) -> error_types::Result<()> {
    if req.file_name.is_empty() {
        return Err(AppError::BadRequest("fileName is required".to_string()));
    }
    if req.file_type.is_empty() {
        return Err(AppError::BadRequest("fileType is required".to_string()));
    }
    Ok(())
}

/// File extension of an upload name, defaulting to `jpg`.
fn extension_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => "jpg",
    }
}

/// Storage key for a new original. Short and collision-free: the item id is
/// the only variable part, the client's file name only contributes its
/// extension.
pub fn original_key(item_id: &str, file_name: &str) -> String {
    format!("{UPLOAD_PREFIX}{item_id}.{}", extension_of(file_name))
}

/// Issues a presigned upload URL and pre-creates the upload record.
#[tracing::instrument(skip(state, req), fields(owner_id = %owner_id))]
pub async fn issue_upload_url(
    state: &AppState,
    owner_id: &str,
    req: &UploadUrlRequest,
) -> error_types::Result<UploadUrlResponse> {
    validate(req)?;

    let item_id = Uuid::new_v4().to_string();
    let key = original_key(&item_id, &req.file_name);

    let identity = ObjectIdentity {
        owner_id: owner_id.to_string(),
        item_id: item_id.clone(),
    };

    // The signature covers key, content type and the identity metadata, so
    // an upload that omits the metadata is refused by the storage layer
    // instead of permanently stranding the record below in `processing`.
    let upload_url = state
        .store
        .presign_put(&key, &req.file_type, &identity.to_metadata(), UPLOAD_URL_TTL)
        .await?;

    let record = UploadRecord {
        owner_id: owner_id.to_string(),
        item_id: item_id.clone(),
        original_key: key,
        original_file_name: req.file_name.clone(),
        thumb_small_key: None,
        thumb_large_key: None,
        status: UploadStatus::Processing,
        created_at: Utc::now().timestamp_millis(),
    };
    state.records.create(&record).await?;

    info!(item_id = %item_id, "upload URL issued");

    Ok(UploadUrlResponse {
        upload_url,
        item_id,
        owner_id: owner_id.to_string(),
    })
}
