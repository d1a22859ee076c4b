//! Core types for Duka.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;
pub mod section;

pub use id::*;
pub use order::{Order, OrderId};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use section::Section;
