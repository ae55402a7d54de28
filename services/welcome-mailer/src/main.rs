//! Welcome mailer
//!
//! Consumes `UserRegistered` events and sends the fixed-template welcome
//! email. Failures are logged and re-raised; redelivery is the platform's
//! job.

use aws_config::BehaviorVersion;
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use error_types::AppError;
use event_bus::UserRegisteredDetail;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use ses_mailer::SesMailer;
use tracing::{error, info};

async fn handle(
    mailer: &SesMailer,
    event: EventBridgeEvent<UserRegisteredDetail>,
) -> error_types::Result<()> {
    let detail = event.detail;
    info!(user_id = %detail.user_id, "sending welcome email");

    if let Err(err) = mailer.send_welcome(&detail.email, &detail.name).await {
        error!(user_id = %detail.user_id, error = %err, "welcome email failed");
        return Err(AppError::from(err));
    }

    info!(user_id = %detail.user_id, "welcome email sent");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let sender = std::env::var("WELCOME_SENDER")
        .map_err(|_| Error::from("WELCOME_SENDER not set"))?;
    info!(sender = %sender, "starting welcome mailer");

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mailer = SesMailer::new(aws_sdk_sesv2::Client::new(&shared_config), &sender);

    run(service_fn(|event: LambdaEvent<EventBridgeEvent<UserRegisteredDetail>>| async {
        handle(&mailer, event.payload).await.map_err(Error::from)
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_user_registered_event() {
        let payload = serde_json::json!({
            "version": "0",
            "id": "5e6b3c2a-0000-0000-0000-000000000000",
            "detail-type": "UserRegistered",
            "source": "app.registration",
            "account": "123456789012",
            "time": "2026-01-01T00:00:00Z",
            "region": "us-east-1",
            "resources": [],
            "detail": {
                "userId": "user_abc123",
                "email": "a@example.com",
                "name": "Ada",
                "timestamp": "2026-01-01T00:00:00Z"
            }
        });

        let event: EventBridgeEvent<UserRegisteredDetail> =
            serde_json::from_value(payload).unwrap();
        assert_eq!(event.detail_type, "UserRegistered");
        assert_eq!(event.detail.email, "a@example.com");
        assert_eq!(event.detail.name, "Ada");
    }
}
