//! Error kinds raised by shop actions and catalog construction.
//!
//! Every [`ShopError`] is a wiring mistake in the caller (a card pointing at a
//! product that does not exist, an add button reachable before a product was
//! viewed). None of them is transient, so callers surface them rather than
//! retry.

use thiserror::Error;

use crate::types::ProductId;

/// Errors returned by storefront actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// A product id that is not in the catalog.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The action's precondition does not hold (e.g., nothing selected).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Navigation to a section name the page does not have.
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

/// Errors building a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// The catalog has no products.
    #[error("catalog has no products")]
    Empty,

    /// The catalog document could not be parsed.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}
