//! The product catalog.
//!
//! A [`Catalog`] is built once at startup and never changes afterwards.
//! Product order is significant: cards render in catalog order and ties in
//! any ranking fall back to it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{CurrencyCode, Price, ProductId};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: String,
}

impl Product {
    /// Whether the product belongs to `category`, ignoring ASCII case.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }
}

/// Catalog document as read from JSON.
///
/// ```json
/// { "currency": "KES", "products": [
///     { "id": 1, "name": "Leather Handbag", "price": 4500,
///       "category": "Handbags", "description": "..." } ] }
/// ```
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    currency: CurrencyCode,
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: u64,
    category: String,
    #[serde(default, alias = "desc")]
    description: String,
}

/// Ordered, immutable set of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Parse a catalog from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the same
    /// errors as [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let currency = document.currency;
        let products = document
            .products
            .into_iter()
            .map(|record| Product {
                id: record.id,
                name: record.name,
                price: Price::new(record.price, currency),
                category: record.category,
                description: record.description,
            })
            .collect();
        Self::new(products)
    }

    /// The shop's built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let product = |id, name: &str, price, category: &str, description: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(price, CurrencyCode::KES),
            category: category.to_string(),
            description: description.to_string(),
        };

        Self {
            products: vec![
                product(
                    1,
                    "Leather Handbag",
                    4500,
                    "Handbags",
                    "Premium quality leather handbag.",
                ),
                product(
                    2,
                    "Running Shoes",
                    3200,
                    "Shoes",
                    "Lightweight breathable mesh shoes.",
                ),
                product(
                    3,
                    "Non-stick Pan",
                    2800,
                    "Kitchenware",
                    "Durable 24cm granite coating pan.",
                ),
                product(
                    4,
                    "Serving Spoons Set",
                    1200,
                    "Kitchenware",
                    "Stainless steel 4-piece set.",
                ),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category names in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.category))
            {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products whose category matches `category`, ignoring ASCII case.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.in_category(category))
    }

    /// A window of the catalog, `limit` products starting at `offset`.
    pub fn page(&self, offset: usize, limit: usize) -> impl Iterator<Item = &Product> {
        self.products.iter().skip(offset).take(limit)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);

        let shoes = catalog.find(ProductId::new(2)).unwrap();
        assert_eq!(shoes.name, "Running Shoes");
        assert_eq!(shoes.price.to_string(), "Ksh 3200");
        assert_eq!(shoes.category, "Shoes");
    }

    #[test]
    fn test_find_missing() {
        assert!(Catalog::builtin().find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["Handbags", "Shoes", "Kitchenware"]
        );
    }

    #[test]
    fn test_by_category_ignores_case() {
        let catalog = Catalog::builtin();
        assert_eq!(
            names(catalog.by_category("kitchenware")),
            vec!["Non-stick Pan", "Serving Spoons Set"]
        );
        assert_eq!(names(catalog.by_category("Toys")), Vec::<&str>::new());
    }

    #[test]
    fn test_page() {
        let catalog = Catalog::builtin();
        assert_eq!(
            names(catalog.page(1, 2)),
            vec!["Running Shoes", "Non-stick Pan"]
        );
        assert_eq!(catalog.page(10, 20).count(), 0);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut products: Vec<Product> = Catalog::builtin().iter().cloned().collect();
        products.push(products[0].clone());
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "currency": "USD",
            "products": [
                { "id": 7, "name": "Mug", "price": 12, "category": "Kitchenware", "desc": "Tall." },
                { "id": 8, "name": "Tote", "price": 30, "category": "Handbags" }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let mug = catalog.find(ProductId::new(7)).unwrap();
        assert_eq!(mug.price.to_string(), "$12");
        assert_eq!(mug.description, "Tall.");
        assert_eq!(catalog.find(ProductId::new(8)).unwrap().description, "");
    }

    #[test]
    fn test_from_json_defaults_to_kes() {
        let json = r#"{ "products": [ { "id": 1, "name": "Pan", "price": 2800, "category": "Kitchenware" } ] }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(
            catalog.find(ProductId::new(1)).unwrap().price.to_string(),
            "Ksh 2800"
        );
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
