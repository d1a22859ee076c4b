//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record a unique ID on the request span)
//! 4. Security headers (CSP, frame denial, etc.)

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
