//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use essence_luxe_core::{ApiResponse, Product, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// List wishlisted products in catalog order.
pub async fn index(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = state.store().wishlist()?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Whether a product is on the wishlist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    let saved = state.store().in_wishlist(&ProductId::from(id))?;
    Ok(Json(ApiResponse::ok(saved)))
}

/// Flip wishlist membership and return the new state.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    let saved = state.store().toggle_wishlist(&ProductId::from(id))?;
    let message = if saved {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    };
    Ok(Json(ApiResponse::ok(saved).with_message(message)))
}
