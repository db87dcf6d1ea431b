//! Per-request correlation IDs.
//!
//! Every response carries an `x-request-id`. A proxy in front of the storefront
//! may already have assigned one; short, non-empty values are kept so logs line
//! up across hops. Anything else gets a fresh UUID v4.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upstream IDs longer than this are discarded.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// Tag the request with an ID, then copy it onto the response.
///
/// The ID lands in the `request_id` field of the `http_request` span and in
/// the Sentry scope, so log lines and captured errors can be joined on it.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = upstream_id(request.headers())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn upstream_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN)
}
