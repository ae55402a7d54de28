//! EventBridge publisher for the registration workflow.

use anyhow::Context;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client;
use serde::{Deserialize, Serialize};

/// Source tag stamped on every event this system publishes.
pub const EVENT_SOURCE: &str = "app.registration";
/// Detail-type of the registration event.
pub const USER_REGISTERED: &str = "UserRegistered";

/// Detail payload of a `UserRegistered` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisteredDetail {
    pub user_id: String,
    pub email: String,
    pub name: String,
    /// RFC 3339 timestamp of the registration.
    pub timestamp: String,
}

/// Publisher bound to a single event bus.
#[derive(Clone, Debug)]
pub struct EventBus {
    client: Client,
    bus_name: String,
}

impl EventBus {
    pub fn new(client: Client, bus_name: &str) -> Self {
        Self {
            client,
            bus_name: bus_name.to_string(),
        }
    }

    /// Publishes a `UserRegistered` event. Failures are surfaced to the
    /// caller; downstream consumers rely on the platform's redelivery.
    #[tracing::instrument(skip(self, detail), fields(user_id = %detail.user_id))]
    pub async fn publish_user_registered(
        &self,
        detail: &UserRegisteredDetail,
    ) -> anyhow::Result<()> {
        let payload =
            serde_json::to_string(detail).context("failed to serialize event detail")?;

        let entry = PutEventsRequestEntry::builder()
            .event_bus_name(&self.bus_name)
            .source(EVENT_SOURCE)
            .detail_type(USER_REGISTERED)
            .detail(payload)
            .build();

        let resp = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .context("failed to publish UserRegistered event")?;

        // PutEvents reports per-entry failures in the response body.
        if resp.failed_entry_count() > 0 {
            let reason = resp
                .entries()
                .iter()
                .find_map(|e| e.error_message().map(|m| m.to_string()))
                .unwrap_or_else(|| "unknown entry failure".to_string());
            anyhow::bail!("event bus rejected UserRegistered entry: {reason}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_serializes_camel_case() {
        let detail = UserRegisteredDetail {
            user_id: "user_abc123".into(),
            email: "a@example.com".into(),
            name: "Ada".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["userId"], "user_abc123");
        assert_eq!(json["email"], "a@example.com");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn detail_round_trips() {
        let detail = UserRegisteredDetail {
            user_id: "user_abc123".into(),
            email: "a@example.com".into(),
            name: "Ada".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_string(&detail).unwrap();
        let restored: UserRegisteredDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, detail);
    }
}
