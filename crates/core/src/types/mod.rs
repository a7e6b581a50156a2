//! Core types for Essence Luxe.
//!
//! This module provides type-safe wrappers for the catalog domain.

pub mod envelope;
pub mod id;
pub mod product;
pub mod rating;
pub mod review;

pub use envelope::ApiResponse;
pub use id::*;
pub use product::{Product, SizeOption};
pub use rating::{Rating, RatingError};
pub use review::{NewReview, Review, ReviewError};
