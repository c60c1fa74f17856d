use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_api::config::AppConfig;
use product_api::database::{seed_products, InMemoryProductStore, ProductStore};
use product_api::{app, AppState};

#[derive(Parser)]
#[command(name = "product-api")]
#[command(about = "Products REST API with JWT authentication")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Bind address (overrides SERVER_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Listen port (overrides SERVER_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Start with an empty store")]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.no_seed {
        config.server.seed_on_startup = false;
    }
    tracing::info!("Starting Product API in {:?} mode", config.environment);
    if config.is_development() {
        tracing::warn!("Development profile: built-in signing secret and admin credentials apply unless overridden");
    }

    let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
    if config.server.seed_on_startup {
        seed_products(store.as_ref()).await.context("failed to seed product store")?;
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store).context("failed to initialise token signing")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Product API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Product API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
