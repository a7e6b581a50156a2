//! Simulated network latency.
//!
//! Lets a front-end be exercised against realistic response times while the
//! backend answers from memory. Disabled when the configured delay is zero.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Sleep for the configured latency before handling the request.
pub async fn simulated_latency_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let delay = state.config().simulated_latency;
    if !delay.is_zero() {
        tracing::trace!(delay_ms = delay.as_millis(), "Simulating latency");
        tokio::time::sleep(delay).await;
    }
    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::store::Catalog;
    use axum::{Router, body::Body, http::Request, middleware, routing::get};
    use tower::ServiceExt;

    fn app(delay: Duration) -> Router {
        let state = AppState::with_catalog(
            StorefrontConfig {
                simulated_latency: delay,
                ..StorefrontConfig::default()
            },
            Catalog::seeded().unwrap(),
        );
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                simulated_latency_middleware,
            ))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_delays_response() {
        let started = Instant::now();
        let response = app(Duration::from_millis(40))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
