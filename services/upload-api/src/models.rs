use record_store::UploadRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /uploads`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
}

/// Response of `POST /uploads`. The caller performs the actual upload
/// against `upload_url`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub item_id: String,
    pub owner_id: String,
}

/// One listed upload: the record plus, once done, presigned read URLs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    #[serde(flatten)]
    pub record: UploadRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_small_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_large_url: Option<String>,
}

/// Response of `GET /images`.
#[derive(Debug, Serialize)]
pub struct ListImagesResponse {
    pub images: Vec<ImageView>,
}
