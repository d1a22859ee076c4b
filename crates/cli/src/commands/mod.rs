//! Command implementations.

pub mod catalog;
pub mod checkout;
pub mod text;

use std::path::Path;

use duka_core::{Catalog, ShopError};
use duka_storefront::config::{ConfigError, StorefrontConfig, load_catalog_file};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or catalog file problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A shop action failed.
    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// Load the catalog from `path`, or from the environment configuration.
///
/// # Errors
///
/// Returns `CliError::Config` if the environment or the catalog file is invalid.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let catalog = match path {
        Some(path) => load_catalog_file(path)?,
        None => StorefrontConfig::from_env()?.load_catalog()?,
    };
    Ok(catalog)
}

/// Write command output to stdout.
#[allow(clippy::print_stdout)]
pub fn print(output: &str) {
    print!("{output}");
}
