//! Signup metrics
//!
//! Consumes `UserRegistered` events and bumps the signup counter. The
//! detail payload does not matter here; every delivery counts one signup.

use aws_config::BehaviorVersion;
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use error_types::AppError;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use record_store::SignupMetrics;
use tracing::{error, info};

async fn handle(
    metrics: &SignupMetrics,
    event: EventBridgeEvent<serde_json::Value>,
) -> error_types::Result<()> {
    info!(detail_type = %event.detail_type, "recording signup");

    if let Err(err) = metrics.record_signup().await {
        error!(error = %err, "failed to record signup metric");
        return Err(AppError::from(err));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let metrics_table = std::env::var("METRICS_TABLE")
        .map_err(|_| Error::from("METRICS_TABLE not set"))?;
    info!(metrics_table = %metrics_table, "starting signup metrics consumer");

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let metrics = SignupMetrics::new(
        aws_sdk_dynamodb::Client::new(&shared_config),
        &metrics_table,
    );

    run(service_fn(|event: LambdaEvent<EventBridgeEvent<serde_json::Value>>| async {
        handle(&metrics, event.payload).await.map_err(Error::from)
    }))
    .await
}
