//! Core types for Sole & Ankle.
//!
//! This module provides type-safe wrappers for catalog domain concepts.

pub mod listing;
pub mod price;
pub mod slug;

pub use listing::ShoeListing;
pub use price::{CurrencyCode, Price};
pub use slug::{Slug, SlugError};
