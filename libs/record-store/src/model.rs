use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

/// Upload lifecycle status. Transitions monotonically processing -> done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
    Done,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "processing" => Some(Self::Processing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// One record per upload, keyed by (ownerId, itemId).
///
/// Created in `processing` with null thumbnail keys; mutated exactly once,
/// by the thumbnail worker, to `done` with both keys set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub owner_id: String,
    pub item_id: String,
    pub original_key: String,
    pub original_file_name: String,
    pub thumb_small_key: Option<String>,
    pub thumb_large_key: Option<String>,
    pub status: UploadStatus,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl UploadRecord {
    pub(crate) fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::from([
            ("ownerId".to_string(), AttributeValue::S(self.owner_id.clone())),
            ("itemId".to_string(), AttributeValue::S(self.item_id.clone())),
            (
                "originalKey".to_string(),
                AttributeValue::S(self.original_key.clone()),
            ),
            (
                "originalFileName".to_string(),
                AttributeValue::S(self.original_file_name.clone()),
            ),
            (
                "status".to_string(),
                AttributeValue::S(self.status.as_str().to_string()),
            ),
            (
                "createdAt".to_string(),
                AttributeValue::N(self.created_at.to_string()),
            ),
        ]);
        if let Some(key) = &self.thumb_small_key {
            item.insert("thumbSmallKey".to_string(), AttributeValue::S(key.clone()));
        }
        if let Some(key) = &self.thumb_large_key {
            item.insert("thumbLargeKey".to_string(), AttributeValue::S(key.clone()));
        }
        item
    }

    pub(crate) fn from_item(item: &HashMap<String, AttributeValue>) -> anyhow::Result<Self> {
        let status_raw = get_string(item, "status")?;
        let status = UploadStatus::from_str(&status_raw)
            .ok_or_else(|| anyhow::anyhow!("unknown upload status {status_raw:?}"))?;

        Ok(Self {
            owner_id: get_string(item, "ownerId")?,
            item_id: get_string(item, "itemId")?,
            original_key: get_string(item, "originalKey")?,
            original_file_name: get_string(item, "originalFileName")?,
            thumb_small_key: get_optional_string(item, "thumbSmallKey"),
            thumb_large_key: get_optional_string(item, "thumbLargeKey"),
            status,
            created_at: get_number(item, "createdAt")?,
        })
    }
}

/// A registered user, keyed by userId.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub name: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl UserRecord {
    pub(crate) fn to_item(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("userId".to_string(), AttributeValue::S(self.user_id.clone())),
            ("email".to_string(), AttributeValue::S(self.email.clone())),
            ("name".to_string(), AttributeValue::S(self.name.clone())),
            (
                "createdAt".to_string(),
                AttributeValue::S(self.created_at.clone()),
            ),
        ])
    }
}

fn get_string(item: &HashMap<String, AttributeValue>, name: &str) -> anyhow::Result<String> {
    match item.get(name) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        _ => Err(anyhow::anyhow!("missing or non-string attribute {name}")),
    }
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    match item.get(name) {
        Some(AttributeValue::S(s)) => Some(s.clone()),
        _ => None,
    }
}

fn get_number(item: &HashMap<String, AttributeValue>, name: &str) -> anyhow::Result<i64> {
    match item.get(name) {
        Some(AttributeValue::N(n)) => n
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("non-numeric attribute {name}")),
        _ => Err(anyhow::anyhow!("missing or non-numeric attribute {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_record() -> UploadRecord {
        UploadRecord {
            owner_id: "u1".into(),
            item_id: "i1".into(),
            original_key: "uploads/i1.jpg".into(),
            original_file_name: "photo.jpg".into(),
            thumb_small_key: None,
            thumb_large_key: None,
            status: UploadStatus::Processing,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn upload_record_round_trips_through_item() {
        let record = pending_record();
        let restored = UploadRecord::from_item(&record.to_item()).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn null_thumbnail_keys_are_absent_attributes() {
        let item = pending_record().to_item();
        assert!(!item.contains_key("thumbSmallKey"));
        assert!(!item.contains_key("thumbLargeKey"));
    }

    #[test]
    fn done_record_carries_both_keys() {
        let mut record = pending_record();
        record.status = UploadStatus::Done;
        record.thumb_small_key = Some("thumbnails/200/photo.jpg".into());
        record.thumb_large_key = Some("thumbnails/400/photo.jpg".into());

        let restored = UploadRecord::from_item(&record.to_item()).unwrap();
        assert_eq!(restored.status, UploadStatus::Done);
        assert_eq!(
            restored.thumb_small_key.as_deref(),
            Some("thumbnails/200/photo.jpg")
        );
        assert_eq!(
            restored.thumb_large_key.as_deref(),
            Some("thumbnails/400/photo.jpg")
        );
    }

    #[test]
    fn malformed_item_is_rejected() {
        let mut item = pending_record().to_item();
        item.insert("status".to_string(), AttributeValue::S("exploded".into()));
        assert!(UploadRecord::from_item(&item).is_err());

        let mut item = pending_record().to_item();
        item.remove("ownerId");
        assert!(UploadRecord::from_item(&item).is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UploadStatus::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(serde_json::to_string(&UploadStatus::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn record_serializes_camel_case() {
        let json = serde_json::to_value(pending_record()).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("originalFileName").is_some());
        assert_eq!(json["status"], "processing");
    }
}
