//! Product route handlers.

use std::fmt::Display;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use essence_luxe_core::{
    ALL_CATEGORIES, ApiResponse, Direction, Gallery, Product, ProductFilters, ProductId, SortKey,
    SortOrder,
};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::StoreError;

/// Product listing query parameters.
///
/// Everything arrives as text so that a bad value drops that one filter
/// instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub q: Option<String>,
}

impl ProductQuery {
    /// Convert to filters, ignoring values that do not parse.
    #[must_use]
    pub fn into_filters(self) -> ProductFilters {
        ProductFilters {
            q: self.q,
            category: self.category,
            min_price: lenient::<Decimal>("minPrice", self.min_price.as_deref()),
            max_price: lenient::<Decimal>("maxPrice", self.max_price.as_deref()),
            sort_by: lenient::<SortKey>("sortBy", self.sort_by.as_deref()),
            order: lenient::<SortOrder>("order", self.order.as_deref()).unwrap_or_default(),
        }
    }
}

/// Parse an optional parameter; blank or invalid values become `None`.
fn lenient<T>(param: &'static str, raw: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(param, value = raw, error = %e, "Ignoring invalid filter");
            None
        }
    }
}

/// Gallery navigation query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    pub index: Option<String>,
    pub direction: Option<String>,
}

/// The gallery position after navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryView {
    pub index: usize,
    pub image: String,
    pub count: usize,
}

/// List products matching the query.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let filters = query.into_filters();
    let products = state.store().list_products(&filters);
    tracing::debug!(count = products.len(), "Products listed");
    Json(ApiResponse::ok(products))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let id = ProductId::from(id);
    let product = state
        .store()
        .get_product(&id)
        .cloned()
        .ok_or(StoreError::ProductNotFound(id))?;
    Ok(Json(ApiResponse::ok(product)))
}

/// Category choices for the filter bar, with the "All" sentinel first.
pub async fn categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let categories = std::iter::once(ALL_CATEGORIES.to_string())
        .chain(state.store().catalog().categories())
        .collect();
    Json(ApiResponse::ok(categories))
}

/// Resolve a gallery position, optionally stepping in `direction`.
///
/// Without a direction the image at `index` (default 0) is returned.
#[instrument(skip(state))]
pub async fn gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<ApiResponse<GalleryView>>> {
    let id = ProductId::from(id);
    let product = state
        .store()
        .get_product(&id)
        .ok_or(StoreError::ProductNotFound(id))?;
    let gallery = Gallery::new(&product.images);

    let current = lenient::<usize>("index", query.index.as_deref()).unwrap_or(0);
    let index = match lenient::<Direction>("direction", query.direction.as_deref()) {
        Some(direction) => gallery.step(current, direction),
        None => Some(current),
    };

    let view = index
        .and_then(|index| {
            gallery.image(index).map(|image| GalleryView {
                index,
                image: image.to_string(),
                count: gallery.len(),
            })
        })
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;
    Ok(Json(ApiResponse::ok(view)))
}
