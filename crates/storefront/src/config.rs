//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: crates/storefront/content/catalog.json)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `STOREFRONT_LOG_FORMAT` - `text` or `json` (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate in [0, 1] (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate in [0, 1] (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_CATALOG_PATH: &str = "crates/storefront/content/catalog.json";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Catalog JSON file
    pub catalog_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    #[default]
    Text,
    /// One JSON object per event for log aggregation.
    Json,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SentryConfig {
    /// DSN. Sentry stays disabled when unset.
    pub dsn: Option<String>,
    /// Environment name reported with events
    pub environment: Option<String>,
    /// Fraction of error events sent
    pub sample_rate: f32,
    /// Fraction of transactions traced
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env
            .or_default("STOREFRONT_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| invalid("STOREFRONT_HOST", e))?;
        let port = env
            .or_default("STOREFRONT_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| invalid("STOREFRONT_PORT", e))?;
        let base_url = parse_base_url(&env.or_default("STOREFRONT_BASE_URL", DEFAULT_BASE_URL))?;
        let catalog_path =
            PathBuf::from(env.or_default("STOREFRONT_CATALOG_PATH", DEFAULT_CATALOG_PATH));
        let static_dir =
            PathBuf::from(env.or_default("STOREFRONT_STATIC_DIR", DEFAULT_STATIC_DIR));
        let log_format = match env.optional("STOREFRONT_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(invalid(
                    "STOREFRONT_LOG_FORMAT",
                    format!("expected text or json (got {other})"),
                ));
            }
        };
        let sentry = SentryConfig::from_env(&env)?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            static_dir,
            log_format,
            sentry,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SentryConfig {
    fn from_env(env: &Env<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            dsn: env.optional("SENTRY_DSN"),
            environment: env.optional("SENTRY_ENVIRONMENT"),
            sample_rate: env
                .optional("SENTRY_SAMPLE_RATE")
                .map_or(Ok(defaults.sample_rate), |v| parse_rate("SENTRY_SAMPLE_RATE", &v))?,
            traces_sample_rate: env
                .optional("SENTRY_TRACES_SAMPLE_RATE")
                .map_or(Ok(defaults.traces_sample_rate), |v| {
                    parse_rate("SENTRY_TRACES_SAMPLE_RATE", &v)
                })?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source; empty values count as unset.
struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    /// Get an optional variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

fn invalid(key: &str, err: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

/// Parse the public base URL, which must be http(s) with a host.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| invalid("STOREFRONT_BASE_URL", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("STOREFRONT_BASE_URL", "scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("STOREFRONT_BASE_URL", "base_url must have a host"));
    }
    Ok(url)
}

/// Parse a sample rate in `[0, 1]`.
fn parse_rate(key: &str, value: &str) -> Result<f32, ConfigError> {
    let rate = value.trim().parse::<f32>().map_err(|e| invalid(key, e))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(invalid(key, format!("must be between 0 and 1 (got {rate})")))
    }
}
