use anyhow::Context;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

const SIGNUPS_METRIC: &str = "signups";

/// Client for the metrics table, keyed by metricName.
#[derive(Clone, Debug)]
pub struct SignupMetrics {
    client: Client,
    table: String,
}

impl SignupMetrics {
    pub fn new(client: Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    /// Atomically bumps the signup counter and stamps the latest signup
    /// time. ADD creates the attribute on first use, so no seed row is
    /// needed.
    #[tracing::instrument(skip(self))]
    pub async fn record_signup(&self) -> anyhow::Result<()> {
        // `count` is a DynamoDB reserved word, hence the #count alias.
        self.client
            .update_item()
            .table_name(&self.table)
            .key("metricName", AttributeValue::S(SIGNUPS_METRIC.to_string()))
            .update_expression("ADD #count :inc SET lastSignupAt = :ts")
            .expression_attribute_names("#count", "count")
            .expression_attribute_values(":inc", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":ts", AttributeValue::S(Utc::now().to_rfc3339()))
            .send()
            .await
            .context("failed to record signup metric")?;

        Ok(())
    }
}
