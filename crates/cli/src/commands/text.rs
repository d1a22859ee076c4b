//! Plain text surface.
//!
//! Keeps the latest view data like the page does and prints only the
//! active section.

use std::fmt::{self, Write as _};

use duka_core::Section;
use duka_storefront::shop::{Card, CheckoutView, DetailView, ReceiptView, Surface};

#[derive(Debug, Default)]
pub struct TextSurface {
    cards: Vec<Card>,
    active: Section,
    detail: Option<DetailView>,
    checkout: CheckoutView,
    receipt: Option<ReceiptView>,
}

impl TextSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_catalog(&self, out: &mut String) -> fmt::Result {
        if self.cards.is_empty() {
            writeln!(out, "No products in this category.")?;
        }
        for card in &self.cards {
            writeln!(out, "[{}] {} - {}", card.product_id, card.name, card.price)?;
        }
        Ok(())
    }

    fn write_detail(&self, out: &mut String) -> fmt::Result {
        match &self.detail {
            Some(detail) => {
                writeln!(out, "{} ({})", detail.title, detail.category)?;
                writeln!(out, "{}", detail.price)?;
                writeln!(out, "{}", detail.description)
            }
            None => writeln!(out, "No product selected."),
        }
    }

    fn write_checkout(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{} item(s)", self.checkout.count)?;
        for row in &self.checkout.rows {
            writeln!(out, "  {} - {}", row.name, row.price)?;
        }
        writeln!(out, "Total: {}{}", self.checkout.currency, self.checkout.total)?;
        if let Some(receipt) = &self.receipt {
            writeln!(out, "Order {} placed for {}", receipt.order_id, receipt.phone)?;
        }
        Ok(())
    }

    /// Text of the active section.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.active);
        // Writing to a String cannot fail
        let _ = match self.active {
            Section::Catalog => self.write_catalog(&mut out),
            Section::ProductPage => self.write_detail(&mut out),
            Section::Checkout => self.write_checkout(&mut out),
        };
        out
    }
}

impl Surface for TextSurface {
    fn render_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    fn activate(&mut self, section: Section) {
        self.active = section;
    }

    fn scroll_to_top(&mut self) {}

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn show_checkout(&mut self, checkout: CheckoutView) {
        self.receipt = None;
        self.checkout = checkout;
    }

    fn show_receipt(&mut self, receipt: ReceiptView) {
        self.receipt = Some(receipt);
    }
}
