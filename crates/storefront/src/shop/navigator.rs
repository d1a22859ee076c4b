//! Section switching.

use duka_core::{Section, ShopError};

use super::{Storefront, Surface};

impl<S: Surface> Storefront<S> {
    /// Show the section called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownSection`] for a name the page does not
    /// have; the active section is left as it was.
    pub fn show(&mut self, name: &str) -> Result<(), ShopError> {
        let section = Section::parse(name)?;
        self.show_section(section);
        Ok(())
    }

    /// Make `section` the single active section and scroll to the top.
    pub fn show_section(&mut self, section: Section) {
        self.active = section;
        self.surface.activate(section);
        self.surface.scroll_to_top();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::test_support::shop;
    use super::*;

    #[test]
    fn test_show_known_section() {
        let mut shop = shop();
        shop.show("checkout").unwrap();

        assert_eq!(shop.active_section(), Section::Checkout);
        assert_eq!(shop.surface().active, Section::Checkout);
    }

    #[test]
    fn test_show_is_idempotent() {
        let mut shop = shop();
        shop.show("product-page").unwrap();
        shop.show("product-page").unwrap();

        assert_eq!(shop.active_section(), Section::ProductPage);
        let active: Vec<_> = Section::ALL
            .iter()
            .filter(|s| shop.surface().section_class(s.as_str()).contains("active"))
            .collect();
        assert_eq!(active, vec![&Section::ProductPage]);
    }

    #[test]
    fn test_show_unknown_section_changes_nothing() {
        let mut shop = shop();
        shop.show("checkout").unwrap();
        shop.surface_mut().take_scroll_reset();

        let err = shop.show("basket").unwrap_err();
        assert_eq!(err, ShopError::UnknownSection("basket".to_string()));
        assert_eq!(shop.active_section(), Section::Checkout);
        assert!(!shop.surface_mut().take_scroll_reset());
    }

    #[test]
    fn test_show_resets_scroll() {
        let mut shop = shop();
        shop.surface_mut().take_scroll_reset();

        shop.show("catalog").unwrap();
        assert!(shop.surface_mut().take_scroll_reset());
    }
}
