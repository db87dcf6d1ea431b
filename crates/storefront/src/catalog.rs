//! In-memory shoe catalog loaded from a JSON file at startup.
//!
//! # File Format
//!
//! ```json
//! {
//!   "currency": "USD",
//!   "shoes": [
//!     {
//!       "slug": "tail-step",
//!       "name": "Tail Step",
//!       "image_src": "/static/images/tail-step.jpg",
//!       "price_cents": 16500,
//!       "sale_price_cents": null,
//!       "release_date": "2026-09-30",
//!       "num_of_colors": 3
//!     }
//!   ]
//! }
//! ```
//!
//! Amounts are integer cents and are converted to exact decimal prices on
//! load. The catalog is the only place listings are validated; the card
//! renderer trusts what it is given.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use sole_ankle_core::{CurrencyCode, Price, ShoeListing, Slug, SlugError};
use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A shoe has an unusable slug.
    #[error("invalid slug {slug:?}: {source}")]
    InvalidSlug {
        slug: String,
        #[source]
        source: SlugError,
    },

    /// Two shoes share a slug.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

/// Sort order for the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently released first.
    #[default]
    Newest,
    /// Cheapest effective price first.
    Price,
}

impl SortOrder {
    /// Query parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Price => "price",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price" => Ok(Self::Price),
            other => Err(format!("unknown sort order {other:?}")),
        }
    }
}

// =============================================================================
// File Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: CurrencyCode,
    shoes: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    slug: String,
    name: String,
    image_src: String,
    price_cents: i64,
    #[serde(default)]
    sale_price_cents: Option<i64>,
    release_date: NaiveDate,
    num_of_colors: u32,
}

impl CatalogEntry {
    fn into_listing(self, currency: CurrencyCode) -> Result<ShoeListing, CatalogError> {
        let slug = Slug::parse(&self.slug).map_err(|source| CatalogError::InvalidSlug {
            slug: self.slug.clone(),
            source,
        })?;

        Ok(ShoeListing {
            slug,
            name: self.name,
            image_src: self.image_src,
            price: Price::from_cents(self.price_cents, currency),
            sale_price: self
                .sale_price_cents
                .map(|cents| Price::from_cents(cents, currency)),
            release_date: self.release_date,
            num_of_colors: self.num_of_colors,
        })
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only set of listings, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shoes: Arc<Vec<ShoeListing>>,
    by_slug: Arc<HashMap<Slug, usize>>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if any
    /// slug is invalid or repeated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), shoes = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON, invalid slugs or duplicates.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let currency = file.currency;

        let listings = file
            .shoes
            .into_iter()
            .map(|entry| entry.into_listing(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_listings(listings)
    }

    /// Build a catalog from listings already in memory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateSlug` if two listings share a slug.
    pub fn from_listings(listings: Vec<ShoeListing>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(listings.len());

        for (index, listing) in listings.iter().enumerate() {
            if by_slug.insert(listing.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(listing.slug.to_string()));
            }
        }

        Ok(Self {
            shoes: Arc::new(listings),
            by_slug: Arc::new(by_slug),
        })
    }

    /// All listings in file order.
    #[must_use]
    pub fn all(&self) -> &[ShoeListing] {
        &self.shoes
    }

    /// Look up a listing by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ShoeListing> {
        let slug = Slug::parse(slug).ok()?;
        self.by_slug
            .get(&slug)
            .and_then(|&index| self.shoes.get(index))
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    /// Whether the catalog has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Listings in the requested order. Ties break on name.
    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<&ShoeListing> {
        let mut shoes: Vec<&ShoeListing> = self.shoes.iter().collect();
        match order {
            SortOrder::Newest => shoes.sort_by(|a, b| {
                b.release_date
                    .cmp(&a.release_date)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortOrder::Price => shoes.sort_by(|a, b| {
                a.effective_price()
                    .cmp(&b.effective_price())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        shoes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "currency": "USD",
        "shoes": [
            {
                "slug": "tail-step",
                "name": "Tail Step",
                "image_src": "/static/images/tail-step.jpg",
                "price_cents": 16500,
                "release_date": "2026-09-30",
                "num_of_colors": 3
            },
            {
                "slug": "rocket-ship",
                "name": "Rocket Ship",
                "image_src": "/static/images/rocket-ship.jpg",
                "price_cents": 10000,
                "sale_price_cents": 5000,
                "release_date": "2024-02-11",
                "num_of_colors": 1
            },
            {
                "slug": "hi-top",
                "name": "Hi-Top",
                "image_src": "/static/images/hi-top.jpg",
                "price_cents": 7500,
                "sale_price_cents": null,
                "release_date": "2025-06-01",
                "num_of_colors": 2
            }
        ]
    }"#;

    #[test]
    fn test_from_json_converts_cents() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let rocket = catalog.get("rocket-ship").unwrap();
        assert_eq!(rocket.price.display(), "$100.00");
        assert_eq!(rocket.sale_price.unwrap().display(), "$50.00");

        let tail = catalog.get("tail-step").unwrap();
        assert!(tail.sale_price.is_none());
        assert_eq!(tail.num_of_colors, 3);
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let raw = r#"{"shoes": [{
            "slug": "a", "name": "A", "image_src": "a.jpg",
            "price_cents": 100, "release_date": "2026-01-01", "num_of_colors": 1
        }]}"#;
        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(
            catalog.get("a").unwrap().price.currency_code,
            CurrencyCode::USD
        );
    }

    #[test]
    fn test_invalid_slug_is_rejected() {
        let raw = r#"{"shoes": [{
            "slug": "Bad Slug", "name": "A", "image_src": "a.jpg",
            "price_cents": 100, "release_date": "2026-01-01", "num_of_colors": 1
        }]}"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSlug { .. }));
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let raw = r#"{"shoes": [
            {"slug": "a", "name": "A", "image_src": "a.jpg",
             "price_cents": 100, "release_date": "2026-01-01", "num_of_colors": 1},
            {"slug": "a", "name": "A again", "image_src": "a.jpg",
             "price_cents": 200, "release_date": "2026-01-02", "num_of_colors": 2}
        ]}"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(ref s) if s == "a"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_shipped_catalog_images_exist() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let catalog = Catalog::load(&root.join("content/catalog.json")).unwrap();
        assert!(!catalog.is_empty());

        for shoe in catalog.all() {
            let relative = shoe.image_src.strip_prefix("/static/").unwrap();
            assert!(
                root.join("static").join(relative).is_file(),
                "missing image for {}: {}",
                shoe.slug.as_str(),
                shoe.image_src
            );
        }
    }

    #[test]
    fn test_get_unknown_or_invalid_slug() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.get("missing").is_none());
        assert!(catalog.get("../etc/passwd").is_none());
    }

    #[test]
    fn test_sorted_newest() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let slugs: Vec<&str> = catalog
            .sorted(SortOrder::Newest)
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(slugs, ["tail-step", "hi-top", "rocket-ship"]);
    }

    #[test]
    fn test_sorted_price_uses_sale_price() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let slugs: Vec<&str> = catalog
            .sorted(SortOrder::Price)
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(slugs, ["rocket-ship", "hi-top", "tail-step"]);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("newest".parse::<SortOrder>(), Ok(SortOrder::Newest));
        assert_eq!("price".parse::<SortOrder>(), Ok(SortOrder::Price));
        assert!("cheapest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Price.as_str(), "price");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.all().is_empty());
    }
}
