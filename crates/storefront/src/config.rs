//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - JSON catalog document (default: built-in catalog)
//! - `STOREFRONT_LOG_FORMAT` - `json` for JSON lines, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use duka_core::{Catalog, CatalogError};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Cannot read catalog {}: {}", .0.display(), .1)]
    CatalogRead(PathBuf, std::io::Error),
    #[error("Invalid catalog {}: {}", .0.display(), .1)]
    Catalog(PathBuf, CatalogError),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog document to load instead of the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Emit logs as JSON lines instead of text
    pub json_logs: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., production)
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            catalog_path: None,
            json_logs: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env_or_default("STOREFRONT_PORT", "3000")?;
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from);
        let json_logs = get_optional_env("STOREFRONT_LOG_FORMAT")
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_rate("SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            catalog_path,
            json_logs,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured catalog, or the built-in one if none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(Catalog::builtin()), load_catalog_file)
    }
}

/// Read and parse a JSON catalog document.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or is not a valid catalog.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::CatalogRead(path.to_path_buf(), e))?;
    let catalog =
        Catalog::from_json(&json).map_err(|e| ConfigError::Catalog(path.to_path_buf(), e))?;

    tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate and check it lies in `0.0..=1.0`.
fn parse_rate(key: &str, default: &str) -> Result<f32, ConfigError> {
    validate_rate(key, parse_env_or_default(key, default)?)
}

fn validate_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_port() {
        let port: u16 = parse_value("STOREFRONT_PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_value_invalid_port() {
        let result = parse_value::<u16>("STOREFRONT_PORT", "eighty");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(ref key, _)) if key == "STOREFRONT_PORT"
        ));
    }

    #[test]
    fn test_parse_value_host() {
        let host: IpAddr = parse_value("STOREFRONT_HOST", "0.0.0.0").unwrap();
        assert!(host.is_unspecified());
    }

    #[test]
    fn test_validate_rate_bounds() {
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 0.0).is_ok());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 1.0).is_ok());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 1.5).is_err());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", -0.1).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::default();

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = StorefrontConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = StorefrontConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/duka/catalog.json")),
            ..StorefrontConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::CatalogRead(_, _))
        ));
    }

    #[test]
    fn test_load_catalog_file() {
        let path = std::env::temp_dir().join(format!("duka-catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{ "products": [ { "id": 5, "name": "Kettle", "price": 1900, "category": "Kitchenware" } ] }"#,
        )
        .unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories(), vec!["Kitchenware"]);
    }

    #[test]
    fn test_load_catalog_invalid_file() {
        let path = std::env::temp_dir().join(format!("duka-catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "products": [] }"#).unwrap();

        let result = load_catalog_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(ConfigError::Catalog(_, CatalogError::Empty))
        ));
    }
}
