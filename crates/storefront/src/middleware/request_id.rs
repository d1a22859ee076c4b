//! Request ID middleware for request tracing and correlation.
//!
//! Every response carries an `x-request-id`. The same ID is recorded on the
//! request span and tagged on the Sentry scope, so a log line, an error
//! report and a client's bug report can be matched up.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID that is passed through unchanged.
const MAX_REQUEST_ID_LEN: usize = 128;

/// An upstream request ID worth keeping: non-empty, bounded, and made of
/// visible ASCII so it is safe in logs and headers.
fn upstream_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
}

/// Middleware that ensures every request has a request ID.
///
/// A well-formed upstream ID is reused, anything else is replaced with a
/// new UUID v4.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = upstream_id(request.headers())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(id) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    #[test]
    fn test_upstream_id_reused() {
        let headers = headers("edge-7f3a");
        assert_eq!(upstream_id(&headers), Some("edge-7f3a"));
    }

    #[test]
    fn test_missing_or_blank_id_rejected() {
        assert_eq!(upstream_id(&HeaderMap::new()), None);
        assert_eq!(upstream_id(&headers("")), None);
        assert_eq!(upstream_id(&headers("has space")), None);
    }

    #[test]
    fn test_overlong_id_rejected() {
        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        assert_eq!(upstream_id(&headers(&long)), None);
    }
}
