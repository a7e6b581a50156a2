//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding. All route handlers return `Result<T, AppError>`, and
//! every error is rendered as a failed response envelope.

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tower_governor::GovernorError;

use essence_luxe_core::ApiResponse;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The rate limiter refused the request.
    #[error("Rate limit: {0}")]
    RateLimited(#[from] GovernorError),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::ProductNotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(StoreError::Validation(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited(GovernorError::TooManyRequests { .. }) => {
                StatusCode::TOO_MANY_REQUESTS
            }
            Self::RateLimited(GovernorError::Other { code, .. }) => *code,
            Self::Store(StoreError::Poisoned(_))
            | Self::RateLimited(GovernorError::UnableToExtractKey) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Extra response headers; `retry-after` for rate-limited requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match self {
            Self::RateLimited(GovernorError::TooManyRequests {
                wait_time,
                headers: extra,
            }) => {
                headers.extend(extra.clone().unwrap_or_default());
                headers.insert(header::RETRY_AFTER, HeaderValue::from(*wait_time));
            }
            Self::RateLimited(GovernorError::Other { headers: extra, .. }) => {
                headers.extend(extra.clone().unwrap_or_default());
            }
            _ => {}
        }
        headers
    }

    /// Client-facing message. Internal details are never exposed.
    fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::ProductNotFound(_)) => "Product not found".to_string(),
            Self::Store(StoreError::Validation(err)) => err.to_string(),
            Self::Store(StoreError::Poisoned(_))
            | Self::RateLimited(GovernorError::UnableToExtractKey) => {
                "Internal server error".to_string()
            }
            Self::RateLimited(GovernorError::TooManyRequests { .. }) => {
                "Too many requests".to_string()
            }
            Self::RateLimited(GovernorError::Other { msg, .. }) => msg
                .clone()
                .unwrap_or_else(|| "Request refused".to_string()),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            self.headers(),
            Json(ApiResponse::failure(self.public_message())),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use essence_luxe_core::{ProductId, ReviewError};

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(StoreError::ProductNotFound(ProductId::new("9")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(StoreError::Validation(ReviewError::EmptyComment).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(StoreError::Poisoned("wishlist").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let err = AppError::from(GovernorError::TooManyRequests {
            wait_time: 7,
            headers: None,
        });
        assert_eq!(err.public_message(), "Too many requests");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "7");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_missing_client_key_is_a_server_error() {
        let err = AppError::from(GovernorError::UnableToExtractKey);
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::from(StoreError::Poisoned("reviews"));
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::from(StoreError::Validation(ReviewError::EmptyName));
        assert_eq!(err.public_message(), "name cannot be empty");
    }
}
