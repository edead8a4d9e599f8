//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request span with method, URI, status, latency)
//! 3. Request ID (propagate or generate `x-request-id`)
//! 4. CORS (only the configured origin is allowed)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
