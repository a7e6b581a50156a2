//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (catalog loaded)
//!
//! # Catalog
//! GET  /api/products                    - Filtered, sorted product list
//! GET  /api/products/{id}               - Product detail
//! GET  /api/products/{id}/gallery       - Gallery navigation
//! GET  /api/categories                  - Category choices, "All" first
//!
//! # Reviews
//! GET  /api/products/{id}/reviews       - Reviews, oldest first
//! POST /api/products/{id}/reviews       - Submit a review (rate limited)
//!
//! # Wishlist
//! GET  /api/wishlist                    - Wishlisted products
//! GET  /api/wishlist/{id}               - Membership of one product
//! POST /api/wishlist/{id}/toggle        - Flip membership (rate limited)
//! ```
//!
//! Every `/api` response is an `ApiResponse` envelope.

pub mod products;
pub mod reviews;
pub mod wishlist;

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{request_id_middleware, simulated_latency_middleware, write_rate_limiter};
use crate::state::AppState;

/// Create the read-only product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/gallery", get(products::gallery))
        .route("/{id}/reviews", get(reviews::index))
}

/// Create the wishlist read routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::index))
        .route("/{id}", get(wishlist::show))
}

/// Create the mutating routes, each behind the per-IP rate limiter.
pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products/{id}/reviews", post(reviews::create))
        .route("/wishlist/{id}/toggle", post(wishlist::toggle))
        .route_layer(write_rate_limiter())
}

/// Create all `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/categories", get(products::categories))
        .merge(write_routes())
}

/// Build the complete storefront application with its middleware stack.
///
/// Sentry layers are left to the binary so tests can use the router as is.
pub fn app(state: AppState) -> Router {
    let api = api_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            simulated_latency_middleware,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let router = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api)
        .fallback(not_found);

    let cors_origins = state.config().cors_origins.clone();
    let router = if cors_origins.is_empty() {
        router
    } else {
        tracing::info!(origins = cors_origins.len(), "CORS enabled");
        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
    };

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog is empty.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.store().catalog().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
