use aws_config::BehaviorVersion;
use error_types::AppError;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use object_store::ObjectStore;
use record_store::UploadRecords;
use tracing::info;
use upload_api::config::Config;
use upload_api::handlers::{images, uploads, AppState};
use upload_api::models::UploadUrlRequest;
use upload_api::{auth, response};

async fn route(state: &AppState, request: Request) -> Response<Body> {
    // Identity first: unauthenticated calls get a 401 before any body
    // processing.
    let owner_id = match auth::owner_id(&request) {
        Ok(owner_id) => owner_id,
        Err(err) => return response::error(&err),
    };

    match (request.method(), request.uri().path()) {
        (&Method::POST, "/uploads") => {
            let body: UploadUrlRequest = match serde_json::from_slice(request.body().as_ref()) {
                Ok(body) => body,
                Err(err) => {
                    return response::error(&AppError::BadRequest(format!(
                        "invalid request body: {err}"
                    )))
                }
            };
            match uploads::issue_upload_url(state, &owner_id, &body).await {
                Ok(resp) => response::json(StatusCode::OK, &resp),
                Err(err) => response::error(&err),
            }
        }
        (&Method::GET, "/images") => match images::list_images(state, &owner_id).await {
            Ok(resp) => response::json(StatusCode::OK, &resp),
            Err(err) => response::error(&err),
        },
        _ => response::error(&AppError::NotFound("no such route".to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    info!(bucket = %config.bucket, uploads_table = %config.uploads_table, "starting upload API");

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = AppState {
        store: ObjectStore::new(aws_sdk_s3::Client::new(&shared_config), &config.bucket),
        records: UploadRecords::new(
            aws_sdk_dynamodb::Client::new(&shared_config),
            &config.uploads_table,
        ),
    };

    run(service_fn(|request: Request| async {
        Ok::<_, Error>(route(&state, request).await)
    }))
    .await
}
