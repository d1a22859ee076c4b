//! Catalog listing commands.

use duka_core::Catalog;
use duka_storefront::shop::Storefront;

use super::text::TextSurface;

/// Catalog cards, optionally limited to one category.
pub fn cards(catalog: Catalog, category: Option<&str>) -> String {
    let mut shop = Storefront::new(catalog, TextSurface::new());
    shop.browse(category);
    shop.surface().render()
}

/// One category per line, in catalog order.
pub fn categories(catalog: &Catalog) -> String {
    catalog
        .categories()
        .into_iter()
        .map(|category| format!("{category}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_filtered() {
        let text = cards(Catalog::builtin(), Some("kitchenware"));

        assert!(text.contains("Non-stick Pan"));
        assert!(text.contains("Serving Spoons Set"));
        assert!(!text.contains("Running Shoes"));
    }

    #[test]
    fn test_categories() {
        let text = categories(&Catalog::builtin());
        assert_eq!(text, "Handbags\nShoes\nKitchenware\n");
    }
}
