//! Display variant selection for shoe cards.
//!
//! Every card is exactly one of three variants. A shoe with a sale price is
//! `on-sale`; otherwise a shoe released within the last calendar month is
//! `new-release`; everything else is `default`. A shoe can be both discounted
//! and recent, in which case `on-sale` wins.

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Price;

/// The mutually exclusive display category of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Kebab-case name, as used in markup and serialized data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the display variant for a listing.
///
/// Checks run in priority order and the first match wins:
/// 1. a sale price is present: [`Variant::OnSale`]
/// 2. [`is_new_shoe`]: [`Variant::NewRelease`]
/// 3. otherwise [`Variant::Default`]
#[must_use]
pub fn select_variant(
    sale_price: Option<&Price>,
    release_date: NaiveDate,
    today: NaiveDate,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new_shoe(release_date, today) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

/// Whether a shoe released on `release_date` is still new as of `today`.
///
/// A shoe is new when it was released on or after the same day one calendar
/// month earlier. Days past the end of the shorter month clamp to its last
/// day, so on March 31 the cutoff is February 28 (or 29). Release dates in
/// the future count as new.
#[must_use]
pub fn is_new_shoe(release_date: NaiveDate, today: NaiveDate) -> bool {
    let cutoff = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);
    release_date >= cutoff
}
