//! Catalog queries and validation.
//!
//! Each command loads the catalog fresh, so a file can be edited and
//! re-checked without restarting anything.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use essence_luxe_core::{Product, ProductFilters, ProductId};
use essence_luxe_storefront::store::Catalog;

/// Summary printed by `validate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub path: String,
    pub products: usize,
    pub categories: Vec<String>,
}

/// Products matching `filters`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn products(
    catalog: Option<&Path>,
    filters: &ProductFilters,
) -> Result<Vec<Product>, Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog)?;
    let products = catalog.query(filters);
    info!(matched = products.len(), total = catalog.len(), "Query complete");
    Ok(products)
}

/// A single product by ID.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or has no such product.
pub fn product(catalog: Option<&Path>, id: &str) -> Result<Product, Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog)?;
    catalog
        .get(&ProductId::new(id))
        .cloned()
        .ok_or_else(|| format!("product not found: {id}").into())
}

/// Distinct categories in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn categories(catalog: Option<&Path>) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    Ok(Catalog::load(catalog)?.categories())
}

/// Load and validate the catalog at `path`.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(path: &Path) -> Result<ValidationReport, Box<dyn std::error::Error>> {
    let catalog = Catalog::from_path(path)?;
    info!(path = %path.display(), products = catalog.len(), "Catalog is valid");
    Ok(ValidationReport {
        path: path.display().to_string(),
        products: catalog.len(),
        categories: catalog.categories(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::path::PathBuf;

    use essence_luxe_core::{SortKey, SortOrder};

    use super::*;

    fn seed_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/data/catalog.json")
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("el-cli-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_products_uses_seed_by_default() {
        let filters = ProductFilters {
            sort_by: Some(SortKey::Price),
            order: SortOrder::Desc,
            ..ProductFilters::default()
        };
        let products = products(None, &filters).unwrap();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Oud Mystique");
    }

    #[test]
    fn test_product_lookup() {
        assert_eq!(product(None, "2").unwrap().category, "Marine");
        let err = product(None, "99").unwrap_err();
        assert_eq!(err.to_string(), "product not found: 99");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            categories(None).unwrap(),
            vec!["Oriental", "Marine", "Floral", "Citrus", "Woody"]
        );
    }

    #[test]
    fn test_validate_seed_file() {
        let report = validate(&seed_path()).unwrap();
        assert_eq!(report.products, 5);
        assert_eq!(report.categories.len(), 5);
    }

    #[test]
    fn test_validate_reports_duplicate_ids() {
        let seed = std::fs::read_to_string(seed_path()).unwrap();
        let mut products: Vec<serde_json::Value> = serde_json::from_str(&seed).unwrap();
        let duplicate = products[0].clone();
        products.push(duplicate);

        let path = scratch_file(
            "duplicate.json",
            &serde_json::to_string(&products).unwrap(),
        );
        let err = validate(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.to_string(), "duplicate product id: 1");
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read catalog file"));
    }
}
