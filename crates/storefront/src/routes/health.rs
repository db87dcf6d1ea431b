//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the catalog has at least one shoe.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().is_empty() {
        tracing::warn!("Readiness check failed: catalog is empty");
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
