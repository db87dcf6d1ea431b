//! Shoe route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use sole_ankle_core::ShoeListing;
use tracing::instrument;

use crate::catalog::SortOrder;
use crate::components::{ShoeCardTemplate, ShoeCardView};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Catalog grid query parameters.
#[derive(Debug, Deserialize)]
pub struct ShoeIndexQuery {
    pub sort: Option<String>,
}

/// Detail page display data for templates.
#[derive(Clone)]
pub struct ShoeDetailView {
    pub card: ShoeCardView,
    pub released_on: String,
}

impl ShoeDetailView {
    fn new(listing: &ShoeListing, today: chrono::NaiveDate) -> Self {
        Self {
            card: ShoeCardView::new(listing, today),
            released_on: listing.release_date.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Catalog grid template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/index.html")]
pub struct ShoeIndexTemplate {
    pub cards: Vec<ShoeCardView>,
    pub sort_newest: bool,
}

/// Shoe detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/show.html")]
pub struct ShoeShowTemplate {
    pub shoe: ShoeDetailView,
}

/// Redirect the site root to the catalog grid.
pub async fn home() -> Redirect {
    Redirect::to("/shoes")
}

/// Display the catalog grid.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShoeIndexQuery>,
) -> Result<impl IntoResponse> {
    let sort = query
        .sort
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(AppError::BadRequest)?
        .unwrap_or_default();

    let today = state.today();
    let cards: Vec<ShoeCardView> = state
        .catalog()
        .sorted(sort)
        .into_iter()
        .map(|listing| ShoeCardView::new(listing, today))
        .collect();

    tracing::debug!(sort = sort.as_str(), cards = cards.len(), "Rendering shoe grid");

    Ok(ShoeIndexTemplate {
        cards,
        sort_newest: sort == SortOrder::Newest,
    })
}

/// Display a shoe's detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let listing = find(&state, &slug)?;
    add_breadcrumb("navigation", "Viewed shoe page", Some(&[("slug", slug.as_str())]));

    Ok(ShoeShowTemplate {
        shoe: ShoeDetailView::new(listing, state.today()),
    })
}

/// Render a single shoe card fragment.
///
/// Returned bare, without the page layout, for swapping into an existing grid.
#[instrument(skip(state))]
pub async fn card(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let listing = find(&state, &slug)?;
    let fragment = ShoeCardTemplate {
        card: ShoeCardView::new(listing, state.today()),
    }
    .render()?;

    Ok(Html(fragment))
}

fn find<'a>(state: &'a AppState, slug: &str) -> Result<&'a ShoeListing> {
    state.catalog().get(slug).ok_or_else(|| {
        tracing::debug!(slug, "Shoe not found");
        AppError::NotFound(format!("shoe {slug}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use sole_ankle_core::{CurrencyCode, Price, Slug};

    use super::*;

    #[test]
    fn test_detail_view_formats_release_date() {
        let listing = ShoeListing {
            slug: Slug::parse("tail-step").unwrap(),
            name: "Tail Step".to_string(),
            image_src: "tail-step.jpg".to_string(),
            price: Price::from_cents(16_500, CurrencyCode::USD),
            sale_price: None,
            release_date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
            num_of_colors: 3,
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();

        let view = ShoeDetailView::new(&listing, today);
        assert_eq!(view.released_on, "October 2, 2026");
        assert_eq!(view.card.color_info, "3 Colors");
    }
}
