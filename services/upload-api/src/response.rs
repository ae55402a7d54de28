//! HTTP response helpers shared by the request handlers.

use error_types::{AppError, ErrorResponse};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;
use tracing::warn;

/// JSON response with the given status.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    let payload = serde_json::to_string(body)
        .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string());

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .expect("static response parts are valid")
}

/// Maps an error onto its status code and JSON body.
pub fn error(err: &AppError) -> Response<Body> {
    warn!(error = %err, status = err.status_code(), "request failed");
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json(status, &ErrorResponse::from_error(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400_with_json_body() {
        let resp = error(&AppError::BadRequest("fileName is required".into()));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = match resp.body() {
            Body::Text(text) => text.clone(),
            _ => panic!("expected text body"),
        };
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "bad_request");
    }

    #[test]
    fn unauthenticated_maps_to_401() {
        let resp = error(&AppError::Unauthenticated);
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
