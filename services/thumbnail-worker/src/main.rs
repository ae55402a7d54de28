#![recursion_limit = "256"]

use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use thumbnail_worker::config::Config;
use thumbnail_worker::handler::ThumbnailWorker;
use thumbnail_worker::processor::ThumbnailProcessor;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    info!(uploads_table = %config.uploads_table, "starting thumbnail worker");

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3 = aws_sdk_s3::Client::new(&shared_config);
    let dynamodb = aws_sdk_dynamodb::Client::new(&shared_config);

    let worker = ThumbnailWorker::new(
        s3,
        record_store::UploadRecords::new(dynamodb, &config.uploads_table),
        ThumbnailProcessor::new(config.jpeg_quality),
    );

    run(service_fn(|event: LambdaEvent<S3Event>| async {
        worker.handle(event.payload).await.map_err(Error::from)
    }))
    .await
}
