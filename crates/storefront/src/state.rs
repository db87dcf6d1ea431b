//! Application state shared across handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Source of "today" for variant selection.
pub type Clock = fn() -> NaiveDate;

/// Today's date in UTC.
#[must_use]
pub fn utc_today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds a read-only snapshot
/// of the configuration and catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    clock: Clock,
}

impl AppState {
    /// Create a new application state using the UTC clock.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_clock(config, catalog, utc_today)
    }

    /// Create a new application state with a custom clock.
    #[must_use]
    pub fn with_clock(config: StorefrontConfig, catalog: Catalog, clock: Clock) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                clock,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shoe catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The date variants are computed against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        (self.inner.clock)()
    }
}
