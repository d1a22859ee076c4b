//! Shop page route handler.
//!
//! The whole shop is one page. All three sections are rendered on every
//! request; only the active one is visible.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use duka_core::Section;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::shop::{Action, PageSurface};
use crate::state::{AppState, Shop};

/// One entry of the category filter.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    /// Whether the catalog is currently filtered by this category.
    pub selected: bool,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageSurface,
    pub categories: Vec<CategoryOption>,
    /// Form target of the catalog navigation buttons.
    pub show_catalog: String,
    /// Form target of the cart navigation button.
    pub show_checkout: String,
}

impl IndexTemplate {
    /// Snapshot the shop into a page.
    fn from_shop(shop: &Shop) -> Self {
        let filter = shop.category_filter();
        let categories = shop
            .catalog()
            .categories()
            .into_iter()
            .map(|name| CategoryOption {
                name: name.to_string(),
                selected: filter.is_some_and(|f| f.eq_ignore_ascii_case(name)),
            })
            .collect();

        Self {
            page: shop.surface().clone(),
            categories,
            show_catalog: Action::Show(Section::Catalog).path(),
            show_checkout: Action::Show(Section::Checkout).path(),
        }
    }

    /// Whether "All" is the current filter.
    fn unfiltered(&self) -> bool {
        !self.categories.iter().any(|c| c.selected)
    }
}

/// Display the shop page in its current state.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<IndexTemplate> {
    state.with_shop(|shop| IndexTemplate::from_shop(shop))
}
