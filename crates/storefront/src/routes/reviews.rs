//! Review route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use essence_luxe_core::{ApiResponse, ProductId, Review};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Review submission body.
#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    pub name: String,
    pub rating: i64,
    pub comment: String,
}

/// List a product's reviews, oldest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Review>>>> {
    let reviews = state.store().list_reviews(&ProductId::from(id))?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// Submit a review.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<ReviewBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>)> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let review =
        state
            .store()
            .add_review(&ProductId::from(id), &body.name, body.rating, &body.comment)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(review).with_message("Review submitted")),
    ))
}
