//! The shop controller.
//!
//! [`Storefront`] owns all session state (catalog, cart, selection, active
//! section, likes and orders) together with the [`Surface`] it draws on.
//! Every user action is one synchronous method call that updates state and
//! surface before returning.
//!
//! The behaviour is split by component:
//!
//! - [`renderer`] - catalog cards
//! - [`navigator`] - active section
//! - [`detail`] - product detail page and likes
//! - [`checkout`] - cart add, checkout summary and orders

pub mod checkout;
pub mod detail;
pub mod navigator;
pub mod renderer;
pub mod surface;

use std::collections::HashMap;

use duka_core::{Cart, Catalog, Order, Product, ProductId, Section, ShopError};

pub use surface::{
    Action, Card, CheckoutView, DetailView, LineItem, PageSurface, ReceiptView, Surface,
};

/// Application state plus the surface it is drawn on.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    category: Option<String>,
    cart: Cart,
    selection: Option<ProductId>,
    active: Section,
    likes: HashMap<ProductId, u32>,
    orders: Vec<Order>,
    surface: S,
}

impl<S: Surface> Storefront<S> {
    /// Create the shop and draw its startup state.
    ///
    /// Renders every catalog card, an empty checkout summary and shows the
    /// catalog section.
    pub fn new(catalog: Catalog, surface: S) -> Self {
        let mut shop = Self {
            catalog,
            category: None,
            cart: Cart::new(),
            selection: None,
            active: Section::Catalog,
            likes: HashMap::new(),
            orders: Vec::new(),
            surface,
        };

        shop.render();
        shop.refresh();
        shop.show_section(Section::Catalog);

        tracing::debug!(products = shop.catalog.len(), "Storefront initialized");
        shop
    }

    /// Run the handler an [`Action`] is bound to.
    ///
    /// # Errors
    ///
    /// Returns whatever error the bound handler returns.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ShopError> {
        match action {
            Action::ViewProduct(id) => self.view(id),
            Action::AddToCart => self.add(),
            Action::Show(section) => {
                self.show_section(section);
                Ok(())
            }
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category the catalog cards are filtered by, if any.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The product currently shown on the detail page, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Product> {
        self.selection.and_then(|id| self.catalog.find(id))
    }

    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.active
    }

    /// Placed orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A shop over the built-in catalog drawn on a fresh page.
    pub fn shop() -> Storefront<PageSurface> {
        Storefront::new(Catalog::builtin(), PageSurface::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::test_support::shop;
    use super::*;

    #[test]
    fn test_startup_state() {
        let shop = shop();

        assert_eq!(shop.active_section(), Section::Catalog);
        assert!(shop.selection().is_none());
        assert!(shop.cart().is_empty());
        assert_eq!(shop.surface().cards.len(), 4);
        assert_eq!(shop.surface().checkout, CheckoutView::default());
    }

    #[test]
    fn test_dispatch_runs_bound_handlers() {
        let mut shop = shop();

        let action = shop.surface().cards[1].action;
        shop.dispatch(action).unwrap();
        assert_eq!(shop.active_section(), Section::ProductPage);

        let add = shop.surface().detail.as_ref().unwrap().add_action;
        shop.dispatch(add).unwrap();
        assert_eq!(shop.cart().len(), 1);

        shop.dispatch(Action::Show(Section::Catalog)).unwrap();
        assert_eq!(shop.active_section(), Section::Catalog);
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let mut shop = shop();
        assert_eq!(
            shop.dispatch(Action::AddToCart),
            Err(ShopError::InvalidState("no product selected"))
        );
    }

    #[test]
    fn test_scenario_two_products() {
        let mut shop = shop();

        shop.view(ProductId::new(2)).unwrap();
        let detail = shop.surface().detail.clone().unwrap();
        assert_eq!(detail.title, "Running Shoes");
        assert_eq!(detail.price, "Ksh 3200");

        shop.add().unwrap();
        let checkout = &shop.surface().checkout;
        assert_eq!(checkout.count, 1);
        assert_eq!(
            checkout.rows,
            vec![LineItem {
                name: "Running Shoes".to_string(),
                price: "Ksh 3200".to_string(),
            }]
        );
        assert_eq!(checkout.total, "3,200");

        shop.view(ProductId::new(1)).unwrap();
        shop.add().unwrap();
        assert_eq!(
            shop.cart().product_ids(),
            vec![ProductId::new(2), ProductId::new(1)]
        );
        assert_eq!(shop.surface().checkout.count, 2);
        assert_eq!(shop.surface().checkout.total, "7,700");
        assert_eq!(shop.active_section(), Section::Checkout);
    }
}
