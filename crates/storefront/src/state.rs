//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{Catalog, CatalogError, Store};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Store,
}

impl AppState {
    /// Create application state, loading the catalog named by the config.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded or is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        tracing::info!(
            products = catalog.len(),
            source = config
                .catalog_path
                .as_ref()
                .map_or_else(|| "embedded seed".to_string(), |p| p.display().to_string()),
            "Catalog seeded"
        );
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create application state around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Store::new(catalog),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the storefront data store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}
