//! Checkout command.

use duka_core::{Catalog, ProductId};
use duka_storefront::shop::Storefront;
use tracing::info;

use super::CliError;
use super::text::TextSurface;

/// View and add each product in turn, then print the checkout section.
///
/// # Errors
///
/// Returns `CliError::Shop` if an ID is not in the catalog.
pub fn run(catalog: Catalog, ids: &[ProductId]) -> Result<String, CliError> {
    let mut shop = Storefront::new(catalog, TextSurface::new());

    for &id in ids {
        shop.view(id)?;
        shop.add()?;
        info!(product_id = %id, cart_size = shop.cart().len(), "Added to cart");
    }

    Ok(shop.surface().render())
}
