//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with `request_id`, status, latency)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (when origins are configured)
//! 5. `Cache-Control: no-store` on API responses
//! 6. Simulated latency (API routes only)
//! 7. Rate limiting (write routes only)

pub mod latency;
pub mod rate_limit;
pub mod request_id;

pub use latency::simulated_latency_middleware;
pub use rate_limit::write_rate_limiter;
pub use request_id::request_id_middleware;
