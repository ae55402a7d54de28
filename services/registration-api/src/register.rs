use chrono::Utc;
use error_types::AppError;
use event_bus::{EventBus, UserRegisteredDetail};
use record_store::{UserRecord, UserRecords};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Display name used when the caller does not supply one.
const DEFAULT_NAME: &str = "anonymous";

/// Body of `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
}

/// 202 response: registration is accepted, the welcome workflow continues
/// asynchronously.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: String,
}

/// Service handles for the registration flow.
pub struct Registration {
    users: UserRecords,
    events: EventBus,
}

/// Generates an opaque user identifier.
fn generate_user_id() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}

impl Registration {
    pub fn new(users: UserRecords, events: EventBus) -> Self {
        Self { users, events }
    }

    /// Persists the user and publishes `UserRegistered`.
    #[tracing::instrument(skip_all)]
    pub async fn register(&self, req: &RegisterRequest) -> error_types::Result<RegisterResponse> {
        if req.email.is_empty() {
            return Err(AppError::BadRequest("email is required".to_string()));
        }
        let name = req.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string());

        let user = UserRecord {
            user_id: generate_user_id(),
            email: req.email.clone(),
            name: name.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        self.users.create(&user).await?;

        self.events
            .publish_user_registered(&UserRegisteredDetail {
                user_id: user.user_id.clone(),
                email: user.email.clone(),
                name,
                timestamp: user.created_at.clone(),
            })
            .await?;

        info!(user_id = %user.user_id, "user registered");

        Ok(RegisterResponse {
            message: "User registered (async processing started)",
            user_id: user.user_id,
        })
    }
}
