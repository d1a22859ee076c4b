//! Placed orders.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::ProductId;

/// Length of a generated order reference.
const ORDER_ID_LENGTH: usize = 8;

/// Short, human-readable order reference (e.g., `3F2A9C1B`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a new reference from the first characters of a v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        let id = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(ORDER_ID_LENGTH)
            .collect::<String>()
            .to_uppercase();
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot of the cart handed over with a contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Product ids in the order they were added to the cart.
    pub items: Vec<ProductId>,
    /// Contact phone, stored as entered.
    pub phone: String,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Create an order placed now.
    #[must_use]
    pub fn new(items: Vec<ProductId>, phone: impl Into<String>) -> Self {
        Self {
            id: OrderId::generate(),
            items,
            phone: phone.into(),
            placed_at: Utc::now(),
        }
    }
}
