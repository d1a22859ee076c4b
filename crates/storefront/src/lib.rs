//! Duka Storefront library.
//!
//! This crate provides the shop controller and its HTML front end as a
//! library, allowing it to be tested and driven from other binaries.
//!
//! # Modules
//!
//! - [`shop`] - The controller and the [`shop::Surface`] it renders into
//! - [`routes`] - Axum handlers and the [`routes::app`] builder
//! - [`state`] - Shared application state
//! - [`config`] - Environment configuration
//! - [`error`] - HTTP error mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod shop;
pub mod state;
