//! Shared error taxonomy for the upload pipeline handlers.
//!
//! Every handler maps failures onto the same small set of conditions and the
//! same JSON error body. Local recovery is absent by design: handlers log
//! context and either re-raise (event-driven handlers, so the platform's
//! redelivery and dead-letter policy applies) or map to an HTTP status
//! (request handlers). No retries, no backoff.

use serde::Serialize;
use thiserror::Error;

/// Result type alias used across the handler crates.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error conditions.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request field is missing or empty
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No caller identity could be resolved for the request
    #[error("Unauthenticated")]
    Unauthenticated,

    /// A stored object lacks the identity metadata the pipeline requires
    #[error("Missing identity metadata: {0}")]
    MissingIdentityMetadata(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A downstream store or service call failed
    #[error("Dependency failure: {0}")]
    DependencyFailure(String),
}

impl AppError {
    /// HTTP status code this condition maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::Unauthenticated => 401,
            AppError::NotFound(_) => 404,
            AppError::MissingIdentityMetadata(_) => 422,
            AppError::DependencyFailure(_) => 502,
        }
    }

    /// Short machine-readable tag used in the JSON error body.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::Unauthenticated => "unauthenticated",
            AppError::MissingIdentityMetadata(_) => "missing_identity_metadata",
            AppError::NotFound(_) => "not_found",
            AppError::DependencyFailure(_) => "dependency_failure",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::DependencyFailure(format!("{err:#}"))
    }
}

/// JSON body returned to API clients on failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            error: err.error_type(),
            message: err.to_string(),
            status: err.status_code(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"error":"{}","message":"serialization failed","status":{}}}"#,
                self.error, self.status
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(AppError::Unauthenticated.status_code(), 401);
        assert_eq!(
            AppError::MissingIdentityMetadata("ownerid".into()).status_code(),
            422
        );
        assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AppError::DependencyFailure("x".into()).status_code(), 502);
    }

    #[test]
    fn error_response_serializes_type_and_message() {
        let err = AppError::BadRequest("fileName is required".into());
        let body = ErrorResponse::from_error(&err);
        let json: serde_json::Value = serde_json::from_str(&body.to_json()).unwrap();
        assert_eq!(json["error"], "bad_request");
        assert_eq!(json["status"], 400);
        assert!(json["message"].as_str().unwrap().contains("fileName"));
    }

    #[test]
    fn anyhow_errors_map_to_dependency_failure() {
        let err: AppError = anyhow::anyhow!("table unavailable").into();
        assert!(matches!(err, AppError::DependencyFailure(_)));
    }
}
