//! JSON API routes.
//!
//! Read access to the catalog, cart and orders, plus product likes. Errors
//! are returned as `{"error": "..."}` with the matching status code.

pub mod orders;
pub mod products;

use serde::Serialize;

use duka_core::Product;

/// Product as exposed by the API.
#[derive(Debug, Serialize)]
pub struct ProductJson {
    pub id: i32,
    pub name: String,
    /// Amount in whole currency units.
    pub price: u64,
    pub currency: &'static str,
    /// Formatted price, e.g. `Ksh 3200`.
    pub price_display: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductJson {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.amount,
            currency: product.price.currency_code.code(),
            price_display: product.price.to_string(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}
