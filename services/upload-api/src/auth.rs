//! Caller identity resolution.
//!
//! Authentication itself is an external concern; by the time a request
//! reaches this handler the platform's authorizer has already run and
//! stamped the resolved identity into the request context. All this module
//! does is read it back out — no identity, no request processing.

use error_types::AppError;
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};

/// Authorizer context field carrying the caller identity.
const OWNER_ID_FIELD: &str = "ownerId";

/// Resolves the caller's owner id, or fails with `Unauthenticated`.
pub fn owner_id(request: &Request) -> error_types::Result<String> {
    match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx
            .authorizer
            .fields
            .get(OWNER_ID_FIELD)
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .ok_or(AppError::Unauthenticated),
        _ => Err(AppError::Unauthenticated),
    }
}
