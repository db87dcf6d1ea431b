//! Sole & Ankle Core - Shared domain types.
//!
//! This crate provides the types and pure functions behind a shoe card:
//! - `storefront` - Server-rendered catalog that displays the cards
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no clock access. Callers pass "today" in explicitly so every derivation is
//! deterministic.
//!
//! # Modules
//!
//! - [`types`] - Listings, slugs and prices
//! - [`variant`] - Display variant selection (on-sale / new-release / default)
//! - [`text`] - Small display helpers such as pluralized labels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod text;
pub mod types;
pub mod variant;

pub use text::pluralize;
pub use types::*;
pub use variant::{Variant, is_new_shoe, select_variant};
