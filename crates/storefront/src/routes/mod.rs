//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /shoes
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Shoes
//! GET  /shoes?sort=newest|price - Catalog grid
//! GET  /shoe/{slug}            - Shoe detail (card link target)
//! GET  /shoe/{slug}/card       - Single card fragment (HTMX)
//!
//! # Assets
//! GET  /static/*               - Files from the static directory
//! ```

pub mod health;
pub mod shoes;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the shoe routes router.
pub fn shoe_routes() -> Router<AppState> {
    Router::new()
        .route("/shoes", get(shoes::index))
        .route("/shoe/{slug}", get(shoes::show))
        .route("/shoe/{slug}/card", get(shoes::card))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shoes::home))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(shoe_routes())
}

/// Build the full application: routes, static files, request ID and tracing.
///
/// Sentry layers are added by the binary so tests can run without a hub.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config().static_dir);

    routes()
        .nest_service("/static", static_dir)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
