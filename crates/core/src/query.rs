//! Catalog query engine: search, filter and sort over an in-memory product list.
//!
//! Filters compose with logical AND and an absent field means "no constraint".
//! The source slice is never modified; every query returns a fresh `Vec`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Sort key over products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `basePrice`
    Price,
    /// Case-insensitive name.
    Name,
    /// `createdAt`
    Date,
}

impl SortKey {
    /// Compare two products by this key, ascending.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Price => a.base_price.cmp(&b.base_price),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Date => a.created_at.cmp(&b.created_at),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            _ => Err(ParseSortError::Key(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Orient an ascending comparison. Equal stays equal, so ties keep input order.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortError::Order(s.to_string())),
        }
    }
}

/// Unrecognized sort parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSortError {
    #[error("unknown sort key '{0}' (expected price, name or date)")]
    Key(String),
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    Order(String),
}

/// A shopper's filter specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    /// Free-text search over name and descriptions.
    pub q: Option<String>,
    /// Exact (case-insensitive) category; [`ALL_CATEGORIES`] disables it.
    pub category: Option<String>,
    /// Inclusive lower bound on `basePrice`.
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound on `basePrice`.
    pub max_price: Option<Decimal>,
    /// Sort key; `None` keeps catalog order.
    pub sort_by: Option<SortKey>,
    pub order: SortOrder,
}

impl ProductFilters {
    /// Active search needle, lowercased. Empty text is no constraint.
    fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Active category constraint.
    fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    fn price_in_bounds(&self, price: Decimal) -> bool {
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }
}

/// Run `filters` against `catalog`.
///
/// Search is applied first, then category and price bounds, then a stable sort.
#[must_use]
pub fn query(catalog: &[Product], filters: &ProductFilters) -> Vec<Product> {
    let needle = filters.needle();
    let category = filters.active_category();

    let mut matched: Vec<Product> = catalog
        .iter()
        .filter(|p| needle.as_deref().is_none_or(|n| p.matches_text(n)))
        .filter(|p| category.is_none_or(|c| p.in_category(c)))
        .filter(|p| filters.price_in_bounds(p.base_price))
        .cloned()
        .collect();

    if let Some(key) = filters.sort_by {
        // `sort_by` is stable
        matched.sort_by(|a, b| filters.order.apply(key.compare(a, b)));
    }

    matched
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::product::tests::product;

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Noir Velvet", "Oriental", 45, "2025-01-01T10:00:00Z"),
            product("2", "Azure Breeze", "Marine", 38, "2025-02-01T10:00:00Z"),
            product("3", "Midnight Rose", "Floral", 120, "2025-02-15T10:00:00Z"),
            product("4", "Golden Citrus", "Citrus", 32, "2025-03-01T10:00:00Z"),
            product("5", "Oud Mystique", "Woody", 155, "2025-01-10T10:00:00Z"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog_order() {
        let catalog = catalog();
        assert_eq!(ids(&query(&catalog, &ProductFilters::default())), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let catalog = catalog();
        let filters = ProductFilters {
            category: Some("marine".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["2"]);
    }

    #[test]
    fn test_all_category_and_empty_category_disable_filter() {
        let catalog = catalog();
        for category in [ALL_CATEGORIES, ""] {
            let filters = ProductFilters {
                category: Some(category.to_string()),
                ..Default::default()
            };
            assert_eq!(query(&catalog, &filters).len(), 5);
        }
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = catalog();
        let filters = ProductFilters {
            min_price: Some(Decimal::new(100, 0)),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["3", "5"]);

        let filters = ProductFilters {
            min_price: Some(Decimal::new(38, 0)),
            max_price: Some(Decimal::new(120, 0)),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_any_descriptive_field() {
        let catalog = catalog();
        let filters = ProductFilters {
            q: Some("MIDNIGHT".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["3"]);

        let filters = ProductFilters {
            q: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query(&catalog, &filters).len(), 5);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let catalog = catalog();
        let mut filters = ProductFilters {
            sort_by: Some(SortKey::Price),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["4", "2", "1", "3", "5"]);

        filters.order = SortOrder::Desc;
        assert_eq!(ids(&query(&catalog, &filters)), ["5", "3", "1", "2", "4"]);
    }

    #[test]
    fn test_sort_by_name_and_date() {
        let catalog = catalog();
        let filters = ProductFilters {
            sort_by: Some(SortKey::Name),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["2", "4", "3", "1", "5"]);

        let filters = ProductFilters {
            sort_by: Some(SortKey::Date),
            order: SortOrder::Desc,
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["4", "3", "2", "5", "1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let catalog = vec![
            product("a", "First", "X", 50, "2025-01-01T00:00:00Z"),
            product("b", "Second", "X", 10, "2025-01-01T00:00:00Z"),
            product("c", "Third", "X", 50, "2025-01-01T00:00:00Z"),
            product("d", "Fourth", "X", 50, "2025-01-01T00:00:00Z"),
        ];

        let mut filters = ProductFilters {
            sort_by: Some(SortKey::Price),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog, &filters)), ["b", "a", "c", "d"]);

        filters.order = SortOrder::Desc;
        assert_eq!(ids(&query(&catalog, &filters)), ["a", "c", "d", "b"]);

        filters.sort_by = Some(SortKey::Date);
        assert_eq!(ids(&query(&catalog, &filters)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_filters_compose_and_result_is_subset() {
        let catalog = catalog();
        let filters = ProductFilters {
            q: Some("o".to_string()),
            category: Some("Woody".to_string()),
            min_price: Some(Decimal::new(100, 0)),
            max_price: Some(Decimal::new(200, 0)),
            sort_by: Some(SortKey::Name),
            order: SortOrder::Asc,
        };
        let result = query(&catalog, &filters);
        assert_eq!(ids(&result), ["5"]);
        assert!(result.iter().all(|p| catalog.contains(p)));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let catalog = catalog();
        let filters = ProductFilters {
            max_price: Some(Decimal::new(1, 0)),
            ..Default::default()
        };
        assert!(query(&catalog, &filters).is_empty());
    }

    #[test]
    fn test_query_leaves_catalog_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let filters = ProductFilters {
            sort_by: Some(SortKey::Price),
            order: SortOrder::Desc,
            ..Default::default()
        };
        let _ = query(&catalog, &filters);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_parse_sort_parameters() {
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!(" Name ".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!(matches!("rating".parse::<SortKey>(), Err(ParseSortError::Key(_))));
        assert!(matches!("up".parse::<SortOrder>(), Err(ParseSortError::Order(_))));
    }
}
