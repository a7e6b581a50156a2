//! Wishlist: a set of saved product IDs.

use std::collections::HashSet;
use std::sync::RwLock;

use essence_luxe_core::{Product, ProductId};

use super::StoreError;

/// In-memory wishlist. Membership is the only state.
#[derive(Debug, Default)]
pub struct WishlistStore {
    ids: RwLock<HashSet<ProductId>>,
}

impl WishlistStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning the new state.
    ///
    /// The check and the update happen under one write lock.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn toggle(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut ids = self
            .ids
            .write()
            .map_err(|_| StoreError::Poisoned("wishlist"))?;

        if ids.remove(id) {
            Ok(false)
        } else {
            ids.insert(id.clone());
            Ok(true)
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn contains(&self, id: &ProductId) -> Result<bool, StoreError> {
        let ids = self
            .ids
            .read()
            .map_err(|_| StoreError::Poisoned("wishlist"))?;
        Ok(ids.contains(id))
    }

    /// Wishlisted products, in the order they appear in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn select(&self, catalog: &[Product]) -> Result<Vec<Product>, StoreError> {
        let ids = self
            .ids
            .read()
            .map_err(|_| StoreError::Poisoned("wishlist"))?;
        Ok(catalog
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}
