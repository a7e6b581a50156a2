//! In-memory storefront data.
//!
//! # Stores
//!
//! - [`Catalog`] - immutable product list, seeded at startup
//! - [`ReviewStore`] - append-only reviews per product
//! - [`WishlistStore`] - set of saved product IDs
//!
//! [`Store`] combines them and is the only thing handlers talk to. It is
//! owned by `AppState` and passed in explicitly; there is no global instance.
//!
//! Nothing is persisted: all state resets when the process restarts.

pub mod catalog;
pub mod reviews;
pub mod wishlist;

use thiserror::Error;
use tracing::instrument;

use essence_luxe_core::{NewReview, Product, ProductFilters, ProductId, Review, ReviewError};

pub use catalog::{Catalog, CatalogError};
pub use reviews::ReviewStore;
pub use wishlist::WishlistStore;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced product is not in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A review submission failed validation.
    #[error("invalid review: {0}")]
    Validation(#[from] ReviewError),

    /// A writer panicked while holding a store lock.
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

/// Catalog, reviews and wishlist behind one handle.
#[derive(Debug)]
pub struct Store {
    catalog: Catalog,
    reviews: ReviewStore,
    wishlist: WishlistStore,
}

impl Store {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            reviews: ReviewStore::new(),
            wishlist: WishlistStore::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products matching `filters`.
    #[must_use]
    pub fn list_products(&self, filters: &ProductFilters) -> Vec<Product> {
        self.catalog.query(filters)
    }

    #[must_use]
    pub fn get_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Reviews for a product, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` for unknown products.
    pub fn list_reviews(&self, product_id: &ProductId) -> Result<Vec<Review>, StoreError> {
        self.require_product(product_id)?;
        self.reviews.list_for(product_id)
    }

    /// Validate and append a review.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` for unknown products and
    /// `StoreError::Validation` for empty fields or a rating outside 1-5.
    #[instrument(skip(self, name, comment))]
    pub fn add_review(
        &self,
        product_id: &ProductId,
        name: &str,
        rating: i64,
        comment: &str,
    ) -> Result<Review, StoreError> {
        self.require_product(product_id)?;
        let submission = NewReview::parse(name, rating, comment)?;
        let review = self.reviews.add(product_id.clone(), submission)?;
        tracing::info!(review_id = %review.id, "Review added");
        Ok(review)
    }

    /// Wishlisted products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the wishlist lock is poisoned.
    pub fn wishlist(&self) -> Result<Vec<Product>, StoreError> {
        self.wishlist.select(self.catalog.products())
    }

    /// Whether a product is on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` for unknown products.
    pub fn in_wishlist(&self, product_id: &ProductId) -> Result<bool, StoreError> {
        self.require_product(product_id)?;
        self.wishlist.contains(product_id)
    }

    /// Flip wishlist membership, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` for unknown products, which keeps
    /// the wishlist a subset of the catalog.
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&self, product_id: &ProductId) -> Result<bool, StoreError> {
        self.require_product(product_id)?;
        let saved = self.wishlist.toggle(product_id)?;
        tracing::debug!(saved, "Wishlist toggled");
        Ok(saved)
    }

    fn require_product(&self, product_id: &ProductId) -> Result<(), StoreError> {
        if self.catalog.contains(product_id) {
            Ok(())
        } else {
            Err(StoreError::ProductNotFound(product_id.clone()))
        }
    }
}
