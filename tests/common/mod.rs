#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};

use product_api::config::AppConfig;
use product_api::database::{seed_products, InMemoryProductStore, ProductStore};
use product_api::{app, AppState};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "12345";

/// A router served in-process on an ephemeral port
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in with the development credentials and return the bearer token
    pub async fn token(&self) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed with {}", res.status());

        let body = res.json::<Value>().await?;
        body["data"]["token"]
            .as_str()
            .map(str::to_string)
            .context("login response missing token")
    }

    pub async fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        Ok(builder.bearer_auth(self.token().await?))
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;
    config
}

/// Server over the four seeded electronics products
pub async fn spawn_seeded() -> Result<TestServer> {
    let store = Arc::new(InMemoryProductStore::new());
    seed_products(store.as_ref()).await?;
    spawn_with_store(store).await
}

pub async fn spawn_with_store(store: Arc<dyn ProductStore>) -> Result<TestServer> {
    spawn_state(AppState::new(test_config(), store)?).await
}

pub async fn spawn_state(state: AppState) -> Result<TestServer> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind ephemeral port")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app(state)).await {
            eprintln!("test server stopped: {e}");
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        client: Client::new(),
    })
}
