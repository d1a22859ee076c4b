//! Catalog cards.

use duka_core::{Product, Section};

use super::{Action, Card, Storefront, Surface};

impl From<&Product> for Card {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            action: Action::ViewProduct(product.id),
        }
    }
}

impl<S: Surface> Storefront<S> {
    /// Replace the catalog container with one card per product, in catalog
    /// order.
    pub fn render(&mut self) {
        self.render_category(None);
    }

    /// Replace the catalog container with the cards of one category.
    ///
    /// `None` renders every product. A category nothing belongs to renders
    /// an empty container.
    pub fn render_category(&mut self, category: Option<&str>) {
        let cards: Vec<Card> = match category {
            Some(category) => self.catalog.by_category(category).map(Card::from).collect(),
            None => self.catalog.iter().map(Card::from).collect(),
        };

        tracing::debug!(cards = cards.len(), ?category, "Rendering catalog");
        self.category = category.map(str::to_string);
        self.surface.render_cards(cards);
    }

    /// Filter the catalog by category and show it.
    ///
    /// Blank input clears the filter.
    pub fn browse(&mut self, category: Option<&str>) {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.render_category(category);
        self.show_section(Section::Catalog);
    }
}
