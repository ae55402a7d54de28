use std::collections::HashMap;

use error_types::AppError;

/// Metadata key carrying the owner identifier. Lowercase, matching what the
/// storage layer returns regardless of how the uploader spelled it.
pub const METADATA_OWNER_ID: &str = "ownerid";
/// Metadata key carrying the upload item identifier.
pub const METADATA_ITEM_ID: &str = "itemid";

/// Identity attached to an original upload at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentity {
    pub owner_id: String,
    pub item_id: String,
}

impl ObjectIdentity {
    /// Extracts the identity from object metadata. Either identifier being
    /// absent is fatal for the pipeline: without them the matching record
    /// cannot be addressed.
    pub fn from_metadata(metadata: &HashMap<String, String>) -> error_types::Result<Self> {
        let owner_id = metadata
            .get(METADATA_OWNER_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::MissingIdentityMetadata(METADATA_OWNER_ID.to_string()))?;
        let item_id = metadata
            .get(METADATA_ITEM_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::MissingIdentityMetadata(METADATA_ITEM_ID.to_string()))?;

        Ok(Self {
            owner_id: owner_id.clone(),
            item_id: item_id.clone(),
        })
    }

    /// Metadata map to attach when signing an upload.
    pub fn to_metadata(&self) -> HashMap<String, String> {
        HashMap::from([
            (METADATA_OWNER_ID.to_string(), self.owner_id.clone()),
            (METADATA_ITEM_ID.to_string(), self.item_id.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn extracts_identity_from_lowercase_keys() {
        let meta = metadata(&[("ownerid", "u1"), ("itemid", "i1")]);
        let identity = ObjectIdentity::from_metadata(&meta).unwrap();
        assert_eq!(identity.owner_id, "u1");
        assert_eq!(identity.item_id, "i1");
    }

    #[test]
    fn missing_owner_is_fatal() {
        let meta = metadata(&[("itemid", "i1")]);
        let err = ObjectIdentity::from_metadata(&meta).unwrap_err();
        assert!(matches!(err, AppError::MissingIdentityMetadata(ref k) if k == "ownerid"));
    }

    #[test]
    fn missing_item_is_fatal() {
        let meta = metadata(&[("ownerid", "u1")]);
        let err = ObjectIdentity::from_metadata(&meta).unwrap_err();
        assert!(matches!(err, AppError::MissingIdentityMetadata(ref k) if k == "itemid"));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let meta = metadata(&[("ownerid", ""), ("itemid", "i1")]);
        assert!(ObjectIdentity::from_metadata(&meta).is_err());
    }

    #[test]
    fn round_trips_through_metadata() {
        let identity = ObjectIdentity {
            owner_id: "u1".into(),
            item_id: "i1".into(),
        };
        let restored = ObjectIdentity::from_metadata(&identity.to_metadata()).unwrap();
        assert_eq!(restored, identity);
    }
}
