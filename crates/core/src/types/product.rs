//! Catalog product records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable bottle size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    /// Display label (e.g., "50ml").
    pub size_label: String,
    pub price: Decimal,
    /// Stock keeping unit, unique within its product.
    pub sku: String,
}

/// A fragrance in the catalog.
///
/// Products are immutable once the catalog is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    /// Price used for filtering and sorting.
    pub base_price: Decimal,
    pub sizes: Vec<SizeOption>,
    /// Image URLs; the first one is the default display image.
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The image shown before the shopper navigates the gallery.
    #[must_use]
    pub fn default_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The size preselected on the detail page.
    #[must_use]
    pub fn default_size(&self) -> Option<&SizeOption> {
        self.sizes.first()
    }

    /// Look up a size by its SKU.
    #[must_use]
    pub fn size_by_sku(&self, sku: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|size| size.sku == sku)
    }

    /// Case-insensitive substring match over name, description and short description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.short_description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Case-insensitive category comparison.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
