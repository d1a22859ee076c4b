//! Duka Core - Shared types library.
//!
//! This crate provides the domain types used across all Duka components:
//! - `storefront` - The shop controller and its HTML front end
//! - `cli` - Command-line front end driving the same controller
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, sections and orders
//! - [`catalog`] - The immutable product catalog
//! - [`cart`] - The append-only shopping cart
//! - [`error`] - Error kinds raised by shop actions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod types;

pub use cart::Cart;
pub use catalog::{Catalog, Product};
pub use error::{CatalogError, ShopError};
pub use types::*;
