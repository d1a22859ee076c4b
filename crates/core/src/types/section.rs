//! Page sections.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShopError;

/// One of the mutually exclusive full-page views.
///
/// The shop keeps a single `Section` as its active view, so "exactly one
/// section is visible" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Grid of product cards.
    #[default]
    Catalog,
    /// Detail page of the selected product.
    ProductPage,
    /// Cart contents and running total.
    Checkout,
}

impl Section {
    /// Every known section, in page order.
    pub const ALL: [Self; 3] = [Self::Catalog, Self::ProductPage, Self::Checkout];

    /// Parse a section from its page name.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownSection`] if `name` is not a known section.
    pub fn parse(name: &str) -> Result<Self, ShopError> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == name)
            .ok_or_else(|| ShopError::UnknownSection(name.to_string()))
    }

    /// The section's page name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::ProductPage => "product-page",
            Self::Checkout => "checkout",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Section {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        assert_eq!(Section::parse("catalog").unwrap(), Section::Catalog);
        assert_eq!(
            Section::parse("product-page").unwrap(),
            Section::ProductPage
        );
        assert_eq!(Section::parse("checkout").unwrap(), Section::Checkout);
    }

    #[test]
    fn test_parse_unknown_section() {
        let err = Section::parse("basket").unwrap_err();
        assert!(matches!(err, ShopError::UnknownSection(ref name) if name == "basket"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Section::parse("Checkout").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_serde_uses_page_names() {
        let json = serde_json::to_string(&Section::ProductPage).unwrap();
        assert_eq!(json, "\"product-page\"");
    }
}
