//! Append-only review storage keyed by product.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use essence_luxe_core::{NewReview, ProductId, Review, ReviewId};

use super::StoreError;

/// In-memory review store.
///
/// Reviews for a product are kept in submission order and never edited or removed.
#[derive(Debug, Default)]
pub struct ReviewStore {
    by_product: RwLock<HashMap<ProductId, Vec<Review>>>,
}

impl ReviewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated submission, assigning its ID and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn add(&self, product_id: ProductId, review: NewReview) -> Result<Review, StoreError> {
        let review = review.into_review(ReviewId::generate(), product_id, Utc::now());

        self.by_product
            .write()
            .map_err(|_| StoreError::Poisoned("reviews"))?
            .entry(review.product_id.clone())
            .or_default()
            .push(review.clone());

        Ok(review)
    }

    /// Reviews for a product, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn list_for(&self, product_id: &ProductId) -> Result<Vec<Review>, StoreError> {
        let guard = self
            .by_product
            .read()
            .map_err(|_| StoreError::Poisoned("reviews"))?;
        Ok(guard.get(product_id).cloned().unwrap_or_default())
    }
}
