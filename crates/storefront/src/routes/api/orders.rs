//! Cart and order API handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use duka_core::ProductId;
use serde::Serialize;
use tracing::instrument;

use super::ProductJson;
use crate::error::ApiResult;
use crate::state::AppState;

/// Cart contents.
#[derive(Debug, Serialize)]
pub struct CartJson {
    pub count: usize,
    pub items: Vec<ProductJson>,
    /// Total in whole currency units.
    pub total: u64,
    /// Total with grouped digits, e.g. `7,700`.
    pub total_display: String,
}

/// A placed order.
#[derive(Debug, Serialize)]
pub struct OrderJson {
    pub id: String,
    pub items: Vec<i32>,
    pub phone: String,
    pub placed_at: DateTime<Utc>,
}

/// Show the cart.
#[instrument(skip(state))]
pub async fn cart(State(state): State<AppState>) -> ApiResult<Json<CartJson>> {
    let cart = state.with_shop(|shop| {
        let cart = shop.cart();
        let total = cart.total();
        CartJson {
            count: cart.len(),
            items: cart.iter().map(ProductJson::from).collect(),
            total: total.amount,
            total_display: total.grouped(),
        }
    })?;

    Ok(Json(cart))
}

/// List placed orders, oldest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderJson>>> {
    let orders: Vec<OrderJson> = state.with_shop(|shop| {
        shop.orders()
            .iter()
            .map(|order| OrderJson {
                id: order.id.to_string(),
                items: order.items.iter().map(ProductId::as_i32).collect(),
                phone: order.phone.clone(),
                placed_at: order.placed_at,
            })
            .collect()
    })?;

    Ok(Json(orders))
}
