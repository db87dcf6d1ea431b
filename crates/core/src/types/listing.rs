//! Shoe listings: the input data for one product card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Price, Slug};
use crate::variant::{Variant, select_variant};

/// One shoe in the catalog.
///
/// Listings are built once when the catalog loads and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeListing {
    /// URL identifier, also used to build the detail page link.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Image reference, used verbatim as the `src` attribute.
    pub image_src: String,
    /// Regular price.
    pub price: Price,
    /// Discounted price. Present iff the shoe is on sale.
    pub sale_price: Option<Price>,
    /// Day the shoe was released.
    pub release_date: NaiveDate,
    /// Number of available colorways.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Derive this listing's display variant as of `today`.
    ///
    /// Only the sale price and release date take part; see [`select_variant`].
    #[must_use]
    pub fn variant(&self, today: NaiveDate) -> Variant {
        select_variant(self.sale_price.as_ref(), self.release_date, today)
    }

    /// The price a customer actually pays.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the shoe currently has a sale price.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CurrencyCode;

    fn listing(sale_cents: Option<i64>, release_date: NaiveDate) -> ShoeListing {
        ShoeListing {
            slug: Slug::parse("tail-step").unwrap(),
            name: "Tail Step".to_string(),
            image_src: "/static/images/tail-step.jpg".to_string(),
            price: Price::from_cents(10_000, CurrencyCode::USD),
            sale_price: sale_cents.map(|c| Price::from_cents(c, CurrencyCode::USD)),
            release_date,
            num_of_colors: 3,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_variant_uses_listing_fields() {
        let today = date(2026, 10, 17);
        assert_eq!(listing(Some(5_000), today).variant(today), Variant::OnSale);
        assert_eq!(
            listing(None, date(2026, 10, 7)).variant(today),
            Variant::NewRelease
        );
        assert_eq!(
            listing(None, date(2024, 10, 17)).variant(today),
            Variant::Default
        );
    }

    #[test]
    fn test_price_and_colors_do_not_affect_variant() {
        let today = date(2026, 10, 17);
        let mut a = listing(None, date(2026, 1, 1));
        let expected = a.variant(today);

        a.price = Price::from_cents(1, CurrencyCode::USD);
        a.num_of_colors = 0;
        assert_eq!(a.variant(today), expected);
    }

    #[test]
    fn test_effective_price() {
        let today = date(2026, 10, 17);
        assert_eq!(
            listing(Some(5_000), today).effective_price(),
            Price::from_cents(5_000, CurrencyCode::USD)
        );
        assert_eq!(
            listing(None, today).effective_price(),
            Price::from_cents(10_000, CurrencyCode::USD)
        );
    }
}
