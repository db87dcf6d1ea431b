//! Integration tests for the Sole & Ankle storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sole-ankle-integration-tests
//! ```
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! against a small fixed catalog and a frozen clock, so no server or network
//! is needed.

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use chrono::NaiveDate;
use sole_ankle_storefront::{
    catalog::Catalog, config::StorefrontConfig, routes, state::AppState,
};
use tower::ServiceExt;

/// Catalog used by the HTTP tests, relative to [`fixed_today`]:
/// - `tail-step`: released 10 days ago, no sale (new release, 3 colors)
/// - `rocket-ship`: released today, on sale for $50.00 from $100.00 (2 colors)
/// - `leather-court`: released two years ago, no sale (default, 1 color)
pub const TEST_CATALOG: &str = r#"{
    "currency": "USD",
    "shoes": [
        {
            "slug": "tail-step",
            "name": "Tail Step",
            "image_src": "/static/images/tail-step.svg",
            "price_cents": 16500,
            "release_date": "2026-10-07",
            "num_of_colors": 3
        },
        {
            "slug": "rocket-ship",
            "name": "Rocket Ship",
            "image_src": "/static/images/rocket-ship.svg",
            "price_cents": 10000,
            "sale_price_cents": 5000,
            "release_date": "2026-10-17",
            "num_of_colors": 2
        },
        {
            "slug": "leather-court",
            "name": "Leather Court",
            "image_src": "/static/images/leather-court.svg",
            "price_cents": 9500,
            "sale_price_cents": null,
            "release_date": "2024-10-17",
            "num_of_colors": 1
        }
    ]
}"#;

/// The frozen "today" for all tests.
///
/// # Panics
///
/// Never; the date is a valid constant.
#[must_use]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

/// Default configuration with the static directory pointed at the storefront crate.
///
/// # Panics
///
/// Panics if the default configuration is invalid.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::from_lookup(|_| None).expect("default config is valid");
    config.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").into();
    config
}

/// Router over [`TEST_CATALOG`].
///
/// # Panics
///
/// Panics if the test catalog fails to parse.
#[must_use]
pub fn test_app() -> Router {
    let catalog = Catalog::from_json(TEST_CATALOG).expect("test catalog parses");
    app_with_catalog(catalog)
}

/// Router over an arbitrary catalog with the frozen clock.
#[must_use]
pub fn app_with_catalog(catalog: Catalog) -> Router {
    routes::app(AppState::with_clock(test_config(), catalog, fixed_today))
}

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Issue a GET request against the router.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
pub async fn get(app: Router, uri: &str) -> TestResponse {
    get_with_headers(app, uri, &[]).await
}

/// Issue a GET request with extra request headers.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
pub async fn get_with_headers(app: Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("valid request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
