//! Product and catalog action handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use duka_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::routes::back_to_page;
use crate::state::AppState;

/// Catalog filter form data.
#[derive(Debug, Deserialize)]
pub struct FilterForm {
    /// Category to show; blank shows every product.
    #[serde(default)]
    pub category: Option<String>,
}

/// Open the detail page of a product.
#[instrument(skip(state))]
pub async fn view(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<Redirect> {
    let redirect = state.with_shop(|shop| shop.view(id).map(|()| back_to_page(shop)))??;
    add_breadcrumb(
        "shop",
        "Viewed product page",
        Some(&[("product_id", &id.to_string())]),
    );
    Ok(redirect)
}

/// Filter the catalog by category.
#[instrument(skip(state))]
pub async fn filter(
    State(state): State<AppState>,
    Form(form): Form<FilterForm>,
) -> Result<Redirect> {
    let redirect = state.with_shop(|shop| {
        shop.browse(form.category.as_deref());
        back_to_page(shop)
    })?;
    Ok(redirect)
}
