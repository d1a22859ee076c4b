//! The shopping cart.

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// Ordered, append-only list of chosen products.
///
/// The same product may appear several times, once per add. There is no
/// removal.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product at the end of the cart.
    pub fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    /// Ids of the items in insertion order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Sum of item prices.
    ///
    /// An empty cart totals zero in the default currency. Amounts saturate
    /// rather than wrap.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code);
        self.items
            .iter()
            .fold(Price::zero(currency), |total, p| {
                total.saturating_add(p.price.amount)
            })
    }
}
