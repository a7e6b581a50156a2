//! Immutable product catalog, seeded once at startup.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

use essence_luxe_core::{Product, ProductFilters, ProductId, query};

/// Seed catalog compiled into the binary.
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("duplicate sku '{sku}' in product {product}")]
    DuplicateSku { product: ProductId, sku: String },
    #[error("product {0} has no sizes")]
    NoSizes(ProductId),
    #[error("product {0} has no images")]
    NoImages(ProductId),
}

/// The product catalog.
///
/// Never changes size after loading; every read hands out clones or borrows
/// so callers can't mutate the underlying list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Load the embedded seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded seed is malformed.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }

    /// Load the catalog at `path`, or the embedded seed when `None`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        path.map_or_else(Self::seeded, Self::from_path)
    }

    /// Read a JSON array of products from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed or validated.
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Build a catalog from already-parsed products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate product IDs, duplicate SKUs within
    /// a product, or products missing sizes or images.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.sizes.is_empty() {
                return Err(CatalogError::NoSizes(product.id.clone()));
            }
            if product.images.is_empty() {
                return Err(CatalogError::NoImages(product.id.clone()));
            }

            let mut skus = HashSet::with_capacity(product.sizes.len());
            for size in &product.sizes {
                if !skus.insert(size.sku.as_str()) {
                    return Err(CatalogError::DuplicateSku {
                        product: product.id.clone(),
                        sku: size.sku.clone(),
                    });
                }
            }

            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        tracing::debug!(products = products.len(), "Catalog loaded");
        Ok(Self { products, index })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Run the query engine over the catalog.
    #[must_use]
    pub fn query(&self, filters: &ProductFilters) -> Vec<Product> {
        query(&self.products, filters)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
