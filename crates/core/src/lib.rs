//! Essence Luxe Core - Shared types and the catalog query engine.
//!
//! This crate provides the domain used by every Essence Luxe component:
//! - `storefront` - JSON API serving catalog, reviews and wishlist
//! - `cli` - Command-line catalog inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no locks,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, reviews, ratings, IDs and the response envelope
//! - [`query`] - Filter specification and the search/filter/sort engine
//! - [`gallery`] - Wrap-around image gallery navigation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod gallery;
pub mod query;
pub mod types;

pub use gallery::{Direction, Gallery, ParseDirectionError};
pub use query::{ALL_CATEGORIES, ProductFilters, SortKey, SortOrder, query};
pub use types::*;
