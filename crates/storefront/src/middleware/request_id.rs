//! Per-request correlation IDs.
//!
//! A proxy-supplied `x-request-id` is kept when it looks sane (short, visible
//! ASCII); anything else is replaced with a fresh UUID. The ID lands on the
//! `http_request` span, the Sentry scope, and the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// The caller's request ID, if it is usable.
fn upstream_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)?
        .to_str()
        .ok()
        .filter(|id| (1..=MAX_UPSTREAM_ID_LEN).contains(&id.len()))
        .filter(|id| id.bytes().all(|b| b.is_ascii_graphic()))
}

pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let id = upstream_id(request.headers())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, middleware, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_preserves_upstream_request_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "edge-1234")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "edge-1234");
    }

    #[tokio::test]
    async fn test_replaces_unusable_upstream_id() {
        let long = "x".repeat(MAX_UPSTREAM_ID_LEN + 1);
        for bad in ["has space", long.as_str()] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri("/")
                        .header(REQUEST_ID_HEADER, bad)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
            assert!(Uuid::parse_str(id).is_ok(), "kept {bad:?}");
        }
    }
}
