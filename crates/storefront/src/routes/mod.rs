//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - The shop page (catalog, product page, checkout)
//! GET  /health                  - Health check
//!
//! # Actions (post/redirect/get back to /)
//! POST /sections/{name}         - Show a section
//! POST /catalog/filter          - Filter catalog cards by category
//! POST /products/{id}/view      - Open a product's detail page
//! POST /cart/add                - Add the selected product to the cart
//! POST /checkout/order          - Place an order for the cart
//!
//! # JSON API
//! GET  /api/products            - Products (?category=&offset=&limit=)
//! GET  /api/products/trending   - Most liked products (?limit=)
//! GET  /api/products/{id}       - One product
//! POST /api/products/{id}/like  - Like a product
//! GET  /api/categories          - Distinct categories
//! GET  /api/cart                - Cart contents and total
//! GET  /api/orders              - Placed orders
//! ```

pub mod api;
pub mod cart;
pub mod home;
pub mod products;
pub mod sections;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    middleware::from_fn,
    response::Redirect,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::{AppState, Shop};

/// Directory the stylesheet is served from.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the action routes router.
pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/sections/{name}", post(sections::show))
        .route("/catalog/filter", post(products::filter))
        .route("/products/{id}/view", post(products::view))
        .route("/cart/add", post(cart::add))
        .route("/checkout/order", post(cart::place_order))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products::index))
        .route("/products/trending", get(api::products::trending))
        .route("/products/{id}", get(api::products::show))
        .route("/products/{id}/like", post(api::products::like))
        .route("/categories", get(api::products::categories))
        .route("/cart", get(api::orders::cart))
        .route("/orders", get(api::orders::index))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health))
        .merge(action_routes())
        .nest("/api", api_routes())
}

/// Build the complete application: routes, static files and middleware.
///
/// Sentry layers are left to the binary so tests can build the same app.
pub fn app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
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
            |response: &Response<Body>, latency: std::time::Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                span.record(
                    "latency_ms",
                    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                );
                DefaultOnResponse::default().on_response(response, latency, span);
            },
        );

    routes()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(from_fn(request_id_middleware))
                .layer(from_fn(security_headers_middleware)),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Where to send the browser after an action, consuming the scroll flag.
///
/// Must run under the same lock as the action so a concurrent action cannot
/// take the flag in between.
pub(crate) fn page_target(shop: &mut Shop) -> &'static str {
    if shop.surface_mut().take_scroll_reset() {
        "/#top"
    } else {
        "/"
    }
}

/// Redirect back to the shop page after an action.
pub(crate) fn back_to_page(shop: &mut Shop) -> Redirect {
    Redirect::to(page_target(shop))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use duka_core::ProductId;

    use super::*;
    use crate::shop::test_support::shop;

    #[test]
    fn test_page_target_consumes_scroll_reset() {
        let mut shop = shop();
        page_target(&mut shop);

        shop.view(ProductId::new(2)).unwrap();
        assert_eq!(page_target(&mut shop), "/#top");
        assert_eq!(page_target(&mut shop), "/");
    }

    #[test]
    fn test_each_action_gets_its_own_target() {
        let state = AppState::new(
            crate::config::StorefrontConfig::default(),
            duka_core::Catalog::builtin(),
        );
        state.with_shop(page_target).unwrap();

        // Two actions back to back each see their own scroll reset
        let first = state
            .with_shop(|shop| shop.view(ProductId::new(1)).map(|()| page_target(shop)))
            .unwrap()
            .unwrap();
        let second = state
            .with_shop(|shop| shop.show("checkout").map(|()| page_target(shop)))
            .unwrap()
            .unwrap();

        assert_eq!(first, "/#top");
        assert_eq!(second, "/#top");
    }
}
