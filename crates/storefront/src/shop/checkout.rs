//! Cart add, checkout summary and orders.

use duka_core::{Cart, Order, Section, ShopError};

use super::{CheckoutView, LineItem, ReceiptView, Storefront, Surface};

impl From<&Cart> for CheckoutView {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        Self {
            count: cart.len(),
            rows: cart
                .iter()
                .map(|item| LineItem {
                    name: item.name.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
            currency: total.currency_code.prefix(),
            total: total.grouped(),
        }
    }
}

impl<S: Surface> Storefront<S> {
    /// Append the selected product to the cart and show the checkout.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidState`] when no product is selected; the
    /// cart is left unchanged.
    pub fn add(&mut self) -> Result<(), ShopError> {
        let id = self
            .selection
            .ok_or(ShopError::InvalidState("no product selected"))?;
        let product = self
            .catalog
            .find(id)
            .ok_or(ShopError::NotFound(id))?
            .clone();

        self.cart.push(product);
        self.refresh();
        self.show_section(Section::Checkout);

        tracing::info!(product_id = %id, cart_size = self.cart.len(), "Added to cart");
        Ok(())
    }

    /// Redraw the cart count, rows and total.
    pub fn refresh(&mut self) {
        self.surface.show_checkout(CheckoutView::from(&self.cart));
    }

    /// Place an order for the current cart contents.
    ///
    /// The cart is snapshotted, not emptied.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidState`] when the cart is empty.
    pub fn place_order(&mut self, phone: &str) -> Result<Order, ShopError> {
        if self.cart.is_empty() {
            return Err(ShopError::InvalidState("cart is empty"));
        }

        let order = Order::new(self.cart.product_ids(), phone.trim());
        self.surface.show_receipt(ReceiptView {
            order_id: order.id.to_string(),
            phone: order.phone.clone(),
            count: order.items.len(),
            total: self.cart.total().display_grouped(),
        });
        self.show_section(Section::Checkout);
        self.orders.push(order.clone());

        tracing::info!(order_id = %order.id, items = order.items.len(), "Order placed");
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use duka_core::ProductId;

    use super::super::test_support::shop;
    use super::*;

    #[test]
    fn test_add_without_selection() {
        let mut shop = shop();

        let err = shop.add().unwrap_err();
        assert_eq!(err, ShopError::InvalidState("no product selected"));
        assert!(shop.cart().is_empty());
        assert_eq!(shop.active_section(), Section::Catalog);
    }

    #[test]
    fn test_add_appends_exactly_one() {
        let mut shop = shop();
        shop.view(ProductId::new(4)).unwrap();

        for expected in 1..=3 {
            shop.add().unwrap();
            assert_eq!(shop.cart().len(), expected);
            assert_eq!(shop.active_section(), Section::Checkout);
        }
    }

    #[test]
    fn test_refresh_after_n_adds() {
        let mut shop = shop();
        let picks = [3, 1, 3, 4, 2];
        for id in picks {
            shop.view(ProductId::new(id)).unwrap();
            shop.add().unwrap();
        }

        let checkout = &shop.surface().checkout;
        assert_eq!(checkout.count, picks.len());
        // 2800 + 4500 + 2800 + 1200 + 3200
        assert_eq!(checkout.total, "14,500");
        let names: Vec<&str> = checkout.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Non-stick Pan",
                "Leather Handbag",
                "Non-stick Pan",
                "Serving Spoons Set",
                "Running Shoes"
            ]
        );
        assert!(checkout.rows.iter().all(|r| r.price.starts_with("Ksh ")));
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let mut shop = shop();
        assert_eq!(
            shop.place_order("0712345678"),
            Err(ShopError::InvalidState("cart is empty"))
        );
        assert!(shop.orders().is_empty());
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let mut shop = shop();
        shop.view(ProductId::new(2)).unwrap();
        shop.add().unwrap();
        shop.view(ProductId::new(1)).unwrap();
        shop.add().unwrap();

        let order = shop.place_order(" 0712345678 ").unwrap();
        assert_eq!(order.items, vec![ProductId::new(2), ProductId::new(1)]);
        assert_eq!(order.phone, "0712345678");
        assert_eq!(shop.orders(), std::slice::from_ref(&order));
        assert_eq!(shop.cart().len(), 2);
        assert_eq!(shop.active_section(), Section::Checkout);

        let receipt = shop.surface().receipt.as_ref().unwrap();
        assert_eq!(receipt.order_id, order.id.to_string());
        assert_eq!(receipt.count, 2);
        assert_eq!(receipt.total, "Ksh 7,700");
    }
}
