//! Essence Luxe Storefront library.
//!
//! This crate provides the storefront API as a library, allowing it to be
//! tested and reused by the CLI and the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
