//! Cart and checkout action handlers.

use axum::{Form, extract::State, response::Redirect};
use duka_core::ShopError;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::routes::back_to_page;
use crate::state::AppState;

/// Place order form data.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    /// Contact phone, stored as entered.
    #[serde(default)]
    pub phone: String,
}

/// Add the selected product to the cart.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>) -> Result<Redirect> {
    let (count, redirect) = state.with_shop(|shop| {
        shop.add()?;
        Ok::<_, ShopError>((shop.cart().len(), back_to_page(shop)))
    })??;
    add_breadcrumb(
        "shop",
        "Added to cart",
        Some(&[("cart_size", &count.to_string())]),
    );
    Ok(redirect)
}

/// Place an order for the cart contents.
#[instrument(skip(state, form))]
pub async fn place_order(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<Redirect> {
    let (order, redirect) = state.with_shop(|shop| {
        let order = shop.place_order(&form.phone)?;
        Ok::<_, ShopError>((order, back_to_page(shop)))
    })??;
    add_breadcrumb(
        "shop",
        "Placed order",
        Some(&[("order_id", order.id.as_str())]),
    );
    Ok(redirect)
}
