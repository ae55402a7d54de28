use aws_config::BehaviorVersion;
use error_types::{AppError, ErrorResponse};
use event_bus::EventBus;
use lambda_http::http::StatusCode;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use record_store::UserRecords;
use registration_api::config::Config;
use registration_api::register::{RegisterRequest, Registration};
use tracing::{info, warn};

fn json_response(status: StatusCode, payload: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .expect("static response parts are valid")
}

fn error_response(err: &AppError) -> Response<Body> {
    warn!(error = %err, status = err.status_code(), "registration failed");
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, ErrorResponse::from_error(err).to_json())
}

async fn handle(registration: &Registration, request: Request) -> Response<Body> {
    let body: RegisterRequest = match serde_json::from_slice(request.body().as_ref()) {
        Ok(body) => body,
        Err(err) => {
            return error_response(&AppError::BadRequest(format!("invalid request body: {err}")))
        }
    };

    match registration.register(&body).await {
        Ok(resp) => match serde_json::to_string(&resp) {
            Ok(payload) => json_response(StatusCode::ACCEPTED, payload),
            Err(err) => error_response(&AppError::DependencyFailure(err.to_string())),
        },
        Err(err) => error_response(&err),
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
    info!(users_table = %config.users_table, event_bus = %config.event_bus_name, "starting registration API");

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let registration = Registration::new(
        UserRecords::new(aws_sdk_dynamodb::Client::new(&shared_config), &config.users_table),
        EventBus::new(
            aws_sdk_eventbridge::Client::new(&shared_config),
            &config.event_bus_name,
        ),
    );

    run(service_fn(|request: Request| async {
        Ok::<_, Error>(handle(&registration, request).await)
    }))
    .await
}
