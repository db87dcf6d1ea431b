//! Shoe card component.
//!
//! A card shows a shoe's image, name, price and color count, plus a banner
//! when the shoe is on sale or newly released. [`ShoeCardView`] flattens a
//! [`ShoeListing`] into display strings so the template only lays things out.

use askama::Template;
use chrono::NaiveDate;
use sole_ankle_core::{ShoeListing, Variant, pluralize};

/// Vertical gap between the image and the text rows, in pixels.
pub const IMAGE_SPACER_PX: u32 = 12;

/// Banner overlay for non-default variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    /// Text shown in the banner.
    pub label: &'static str,
    /// CSS modifier class that sets the banner color.
    pub class: &'static str,
}

impl Banner {
    /// The banner for a variant, if it has one.
    #[must_use]
    pub const fn for_variant(variant: Variant) -> Option<Self> {
        match variant {
            Variant::OnSale => Some(Self {
                label: "Sale",
                class: "shoe-card__banner--sale",
            }),
            Variant::NewRelease => Some(Self {
                label: "Just Released!",
                class: "shoe-card__banner--release",
            }),
            Variant::Default => None,
        }
    }
}

/// Card display data for templates.
#[derive(Debug, Clone)]
pub struct ShoeCardView {
    pub href: String,
    pub name: String,
    pub image_src: String,
    /// Regular price, formatted.
    pub price: String,
    /// Strike through the regular price. Set whenever a sale price exists.
    pub price_struck: bool,
    /// Sale price, formatted.
    pub sale_price: Option<String>,
    pub color_info: String,
    pub variant: Variant,
    pub banner: Option<Banner>,
    pub spacer_px: u32,
}

impl ShoeCardView {
    /// Build the card for `listing` as of `today`.
    #[must_use]
    pub fn new(listing: &ShoeListing, today: NaiveDate) -> Self {
        let variant = listing.variant(today);

        Self {
            href: listing.slug.href(),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            price: listing.price.display(),
            price_struck: listing.sale_price.is_some(),
            sale_price: listing.sale_price.as_ref().map(|p| p.display()),
            color_info: pluralize("Color", listing.num_of_colors),
            variant,
            banner: Banner::for_variant(variant),
            spacer_px: IMAGE_SPACER_PX,
        }
    }

    /// Kebab-case variant name for the `data-variant` attribute.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        self.variant.as_str()
    }
}

/// Standalone card fragment.
#[derive(Template)]
#[template(path = "partials/shoe_card.html")]
pub struct ShoeCardTemplate {
    pub card: ShoeCardView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Days;
    use sole_ankle_core::{CurrencyCode, Price, Slug};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn listing(
        price_cents: i64,
        sale_cents: Option<i64>,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> ShoeListing {
        ShoeListing {
            slug: Slug::parse("tail-step").unwrap(),
            name: "Tail Step".to_string(),
            image_src: "tail-step.jpg".to_string(),
            price: Price::from_cents(price_cents, CurrencyCode::USD),
            sale_price: sale_cents.map(|c| Price::from_cents(c, CurrencyCode::USD)),
            release_date,
            num_of_colors,
        }
    }

    fn render(card: ShoeCardView) -> String {
        ShoeCardTemplate { card }.render().unwrap()
    }

    #[test]
    fn test_on_sale_released_today() {
        let card = ShoeCardView::new(&listing(10_000, Some(8_000), today(), 2), today());
        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.banner.unwrap().label, "Sale");

        let html = render(card);
        assert!(html.contains("shoe-card__banner--sale"));
        assert!(html.contains(">Sale<"));
        assert!(!html.contains("Just Released!"));
    }

    #[test]
    fn test_new_release_ten_days_old() {
        let released = today() - Days::new(10);
        let card = ShoeCardView::new(&listing(10_000, None, released, 2), today());
        assert_eq!(card.variant, Variant::NewRelease);

        let html = render(card);
        assert!(html.contains("Just Released!"));
        assert!(html.contains("shoe-card__banner--release"));
        assert!(html.contains("data-variant=\"new-release\""));
    }

    #[test]
    fn test_default_has_no_banner() {
        let released = NaiveDate::from_ymd_opt(2024, 10, 17).unwrap();
        let card = ShoeCardView::new(&listing(10_000, None, released, 2), today());
        assert_eq!(card.variant, Variant::Default);
        assert!(card.banner.is_none());

        let html = render(card);
        assert!(!html.contains("shoe-card__banner"));
        assert!(!html.contains("Sale"));
        assert!(!html.contains("Just Released!"));
    }

    #[test]
    fn test_color_label_pluralization() {
        let one = ShoeCardView::new(&listing(10_000, None, today(), 1), today());
        assert_eq!(one.color_info, "1 Color");

        let three = ShoeCardView::new(&listing(10_000, None, today(), 3), today());
        assert_eq!(three.color_info, "3 Colors");
        assert!(render(three).contains("3 Colors"));
    }

    #[test]
    fn test_sale_price_strikes_original() {
        let card = ShoeCardView::new(&listing(10_000, Some(5_000), today(), 1), today());
        assert!(card.price_struck);
        assert_eq!(card.price, "$100.00");
        assert_eq!(card.sale_price.as_deref(), Some("$50.00"));

        let html = render(card);
        assert!(html.contains("shoe-card__price--struck"));
        assert!(html.contains("$100.00"));
        assert!(html.contains("shoe-card__sale-price"));
        assert!(html.contains("$50.00"));
    }

    #[test]
    fn test_full_price_not_struck() {
        let card = ShoeCardView::new(&listing(10_000, None, today(), 1), today());
        assert!(!card.price_struck);
        assert!(card.sale_price.is_none());

        let html = render(card);
        assert!(!html.contains("shoe-card__price--struck"));
        assert!(!html.contains("shoe-card__sale-price"));
    }

    #[test]
    fn test_link_target_uses_slug() {
        let card = ShoeCardView::new(&listing(10_000, None, today(), 1), today());
        assert_eq!(card.href, "/shoe/tail-step");
    }

    #[test]
    fn test_banner_for_variant() {
        assert_eq!(Banner::for_variant(Variant::OnSale).unwrap().label, "Sale");
        assert_eq!(
            Banner::for_variant(Variant::NewRelease).unwrap().label,
            "Just Released!"
        );
        assert!(Banner::for_variant(Variant::Default).is_none());
    }
}
