//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use duka_core::Catalog;

use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::shop::{PageSurface, Storefront};

/// The shop session every handler works on.
pub type Shop = Storefront<PageSurface>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the single shop session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    shop: Mutex<Shop>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Catalog the shop sells from
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let shop = Storefront::new(catalog, PageSurface::new());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                shop: Mutex::new(shop),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Run `f` with exclusive access to the shop.
    ///
    /// The lock is held only for the duration of `f`, which must not await.
    /// One action therefore always completes before the next one starts.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if an earlier handler panicked while
    /// holding the lock.
    pub fn with_shop<T>(&self, f: impl FnOnce(&mut Shop) -> T) -> Result<T, AppError> {
        let mut shop = self
            .inner
            .shop
            .lock()
            .map_err(|e| AppError::Internal(format!("shop lock poisoned: {e}")))?;
        Ok(f(&mut shop))
    }
}
