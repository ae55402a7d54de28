use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::model::{UploadRecord, UploadStatus};

/// Client for the uploads table: point writes keyed by (ownerId, itemId),
/// range query by ownerId.
#[derive(Clone, Debug)]
pub struct UploadRecords {
    client: Client,
    table: String,
}

impl UploadRecords {
    pub fn new(client: Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    /// Creates the record for a freshly issued upload.
    #[tracing::instrument(skip(self, record), fields(owner_id = %record.owner_id, item_id = %record.item_id))]
    pub async fn create(&self, record: &UploadRecord) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record.to_item()))
            .send()
            .await
            .context("failed to create upload record")?;

        Ok(())
    }

    /// Marks the record done and sets both thumbnail keys.
    ///
    /// Unconditional by design: the written values are a deterministic
    /// function of the original object, so duplicate deliveries converge
    /// on the same terminal state.
    #[tracing::instrument(skip(self))]
    pub async fn mark_done(
        &self,
        owner_id: &str,
        item_id: &str,
        thumb_small_key: &str,
        thumb_large_key: &str,
    ) -> anyhow::Result<()> {
        // `status` is a DynamoDB reserved word, hence the #st alias.
        self.client
            .update_item()
            .table_name(&self.table)
            .key("ownerId", AttributeValue::S(owner_id.to_string()))
            .key("itemId", AttributeValue::S(item_id.to_string()))
            .update_expression("SET #st = :s, thumbSmallKey = :small, thumbLargeKey = :large")
            .expression_attribute_names("#st", "status")
            .expression_attribute_values(
                ":s",
                AttributeValue::S(UploadStatus::Done.as_str().to_string()),
            )
            .expression_attribute_values(":small", AttributeValue::S(thumb_small_key.to_string()))
            .expression_attribute_values(":large", AttributeValue::S(thumb_large_key.to_string()))
            .send()
            .await
            .context("failed to mark upload record done")?;

        Ok(())
    }

    /// All records owned by `owner_id`, following pagination to the end.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_owner(&self, owner_id: &str) -> anyhow::Result<Vec<UploadRecord>> {
        let mut records = Vec::new();
        let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let query_output = self
                .client
                .query()
                .table_name(&self.table)
                .key_condition_expression("ownerId = :uid")
                .expression_attribute_values(":uid", AttributeValue::S(owner_id.to_string()))
                .set_exclusive_start_key(last_evaluated_key)
                .send()
                .await
                .context("failed to query upload records")?;

            if let Some(items) = &query_output.items {
                for item in items {
                    records.push(UploadRecord::from_item(item)?);
                }
            }

            last_evaluated_key = query_output.last_evaluated_key;
            if last_evaluated_key.is_none() {
                break;
            }
        }

        Ok(records)
    }
}
