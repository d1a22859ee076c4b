//! The display boundary the shop renders into.
//!
//! The controller never formats HTML or text itself. It hands finished view
//! data to a [`Surface`], which decides how to show it: [`PageSurface`] keeps
//! it as the render model for the HTML page, the CLI prints it.

use duka_core::{CurrencyCode, ProductId, Section};

/// A handle bound to the handler it triggers.
///
/// Cards and buttons carry one of these instead of naming a global function;
/// [`Storefront::dispatch`](super::Storefront::dispatch) runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the detail page of a product.
    ViewProduct(ProductId),
    /// Add the selected product to the cart.
    AddToCart,
    /// Switch to a section.
    Show(Section),
}

impl Action {
    /// URL the HTML front end posts to in order to trigger this action.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ViewProduct(id) => format!("/products/{id}/view"),
            Self::AddToCart => "/cart/add".to_string(),
            Self::Show(section) => format!("/sections/{section}"),
        }
    }
}

/// One catalog card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub product_id: ProductId,
    pub name: String,
    /// Formatted price, e.g. `Ksh 4500`.
    pub price: String,
    pub action: Action,
}

/// Fields of the product detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub likes: u32,
    pub add_action: Action,
}

/// One checkout row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub price: String,
}

/// Cart summary shown on the checkout section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub count: usize,
    pub rows: Vec<LineItem>,
    /// Prefix printed before the total, e.g. `Ksh `.
    pub currency: &'static str,
    /// Total with grouped digits, e.g. `7,700`.
    pub total: String,
}

impl Default for CheckoutView {
    fn default() -> Self {
        Self {
            count: 0,
            rows: Vec::new(),
            currency: CurrencyCode::default().prefix(),
            total: "0".to_string(),
        }
    }
}

/// Confirmation shown after an order is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptView {
    pub order_id: String,
    pub phone: String,
    pub count: usize,
    /// Total with prefix, e.g. `Ksh 7,700`.
    pub total: String,
}

/// Something the shop can draw its state onto.
pub trait Surface {
    /// Replace the catalog container's cards.
    fn render_cards(&mut self, cards: Vec<Card>);

    /// Make `section` the only visible section.
    fn activate(&mut self, section: Section);

    /// Reset the scroll position to the top of the page.
    fn scroll_to_top(&mut self);

    /// Fill the detail page fields.
    fn show_detail(&mut self, detail: DetailView);

    /// Redraw the cart count, rows and total.
    fn show_checkout(&mut self, checkout: CheckoutView);

    /// Show an order confirmation.
    fn show_receipt(&mut self, receipt: ReceiptView);
}

/// Render model for the single HTML page.
#[derive(Debug, Clone, Default)]
pub struct PageSurface {
    pub cards: Vec<Card>,
    pub active: Section,
    pub detail: Option<DetailView>,
    pub checkout: CheckoutView,
    pub receipt: Option<ReceiptView>,
    scroll_reset: bool,
}

impl PageSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS classes for the section called `name`.
    #[must_use]
    pub fn section_class(&self, name: &str) -> &'static str {
        if self.active.as_str() == name {
            "section active"
        } else {
            "section"
        }
    }

    /// Whether a scroll reset is pending, clearing the flag.
    pub const fn take_scroll_reset(&mut self) -> bool {
        let pending = self.scroll_reset;
        self.scroll_reset = false;
        pending
    }
}

impl Surface for PageSurface {
    fn render_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    fn activate(&mut self, section: Section) {
        self.active = section;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_reset = true;
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn show_checkout(&mut self, checkout: CheckoutView) {
        // A changed cart supersedes the last confirmation
        self.receipt = None;
        self.checkout = checkout;
    }

    fn show_receipt(&mut self, receipt: ReceiptView) {
        self.receipt = Some(receipt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_paths() {
        assert_eq!(
            Action::ViewProduct(ProductId::new(2)).path(),
            "/products/2/view"
        );
        assert_eq!(Action::AddToCart.path(), "/cart/add");
        assert_eq!(
            Action::Show(Section::Checkout).path(),
            "/sections/checkout"
        );
    }

    #[test]
    fn test_section_class_marks_only_active() {
        let mut page = PageSurface::new();
        page.activate(Section::ProductPage);

        assert_eq!(page.section_class("product-page"), "section active");
        assert_eq!(page.section_class("catalog"), "section");
        assert_eq!(page.section_class("checkout"), "section");
    }

    #[test]
    fn test_take_scroll_reset_clears_flag() {
        let mut page = PageSurface::new();
        assert!(!page.take_scroll_reset());

        page.scroll_to_top();
        assert!(page.take_scroll_reset());
        assert!(!page.take_scroll_reset());
    }

    #[test]
    fn test_checkout_clears_receipt() {
        let mut page = PageSurface::new();
        page.show_receipt(ReceiptView {
            order_id: "ABCD1234".to_string(),
            phone: "0712345678".to_string(),
            count: 1,
            total: "Ksh 3,200".to_string(),
        });
        page.show_checkout(CheckoutView::default());
        assert!(page.receipt.is_none());
    }
}
