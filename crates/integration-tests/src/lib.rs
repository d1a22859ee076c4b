//! Integration tests for Duka.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p duka-integration-tests
//! ```
//!
//! Each test starts its own storefront on an ephemeral port with the
//! built-in catalog, so tests never share a cart.
//!
//! # Test Categories
//!
//! - `storefront_flow` - Catalog, product page and checkout through HTML forms
//! - `storefront_api` - JSON API

use std::net::SocketAddr;

use duka_core::Catalog;
use duka_storefront::config::StorefrontConfig;
use duka_storefront::routes;
use duka_storefront::state::AppState;
use reqwest::{Client, redirect};
use tokio::net::TcpListener;

/// A running storefront and clients to talk to it.
pub struct TestServer {
    pub addr: SocketAddr,
    /// Follows the post/redirect/get redirects like a browser.
    pub client: Client,
    /// Stops at the redirect so its status and target can be checked.
    pub raw_client: Client,
}

impl TestServer {
    /// Start a storefront with the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or a client cannot be built.
    pub async fn spawn() -> Self {
        Self::spawn_with(Catalog::builtin()).await
    }

    /// Start a storefront selling from `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or a client cannot be built.
    pub async fn spawn_with(catalog: Catalog) -> Self {
        let state = AppState::new(StorefrontConfig::default(), catalog);
        let app = routes::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            client: Client::new(),
            raw_client: Client::builder()
                .redirect(redirect::Policy::none())
                .build()
                .expect("Failed to build client"),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Fetch the shop page HTML.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn page(&self) -> String {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("GET / failed")
            .text()
            .await
            .expect("Failed to read page body")
    }

    /// Submit an empty action form, following the redirect.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .send()
            .await
            .expect("POST failed")
    }

    /// Submit an action form with fields, following the redirect.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("POST failed")
    }

    /// GET a JSON API path and decode the body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn api(&self, path: &str) -> serde_json::Value {
        self.client
            .get(self.url(&format!("/api{path}")))
            .send()
            .await
            .expect("API request failed")
            .json()
            .await
            .expect("API response was not JSON")
    }
}

/// Whether the section called `name` is the visible one on `page`.
#[must_use]
pub fn is_active(page: &str, name: &str) -> bool {
    page.contains(&format!(r#"<section id="{name}" class="section active">"#))
}
