use anyhow::Context;
use aws_sdk_dynamodb::Client;

use crate::model::UserRecord;

/// Client for the users table, keyed by userId.
#[derive(Clone, Debug)]
pub struct UserRecords {
    client: Client,
    table: String,
}

impl UserRecords {
    pub fn new(client: Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    #[tracing::instrument(skip(self, record), fields(user_id = %record.user_id))]
    pub async fn create(&self, record: &UserRecord) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record.to_item()))
            .send()
            .await
            .context("failed to create user record")?;

        Ok(())
    }
}
