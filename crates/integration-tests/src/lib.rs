//! Integration tests for Essence Luxe.
//!
//! Each test boots its own storefront on an ephemeral port with a fresh
//! in-memory store, so tests are independent and need no external services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p essence-luxe-integration-tests
//! ```

use std::net::SocketAddr;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;

use essence_luxe_core::ApiResponse;
use essence_luxe_storefront::config::StorefrontConfig;
use essence_luxe_storefront::routes;
use essence_luxe_storefront::state::AppState;

/// A storefront running in the background of the current test runtime.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Start a storefront with the default configuration and seed catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind or the seed catalog is invalid.
    pub async fn spawn() -> Self {
        Self::spawn_with(StorefrontConfig::default()).await
    }

    /// Start a storefront with `config`. Host and port are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind or the catalog cannot be loaded.
    pub async fn spawn_with(config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("Failed to load catalog");
        let app = routes::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and decode the envelope.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not a matching envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> (u16, ApiResponse<T>) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("Invalid envelope"))
    }

    /// POST a JSON body to `path` and decode the envelope.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not a matching envelope.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (u16, ApiResponse<T>) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("Invalid envelope"))
    }
}
