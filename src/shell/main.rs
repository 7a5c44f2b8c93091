use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use shipment_mock_api::modules::shipments::adapters::outbound::fixture_store::FixtureStore;
use shipment_mock_api::shell::config::ServerConfig;
use shipment_mock_api::shell::http;
use shipment_mock_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    let store = FixtureStore::with_default_fixtures().context("failed to load fixtures")?;
    let state = AppState::from_store(Arc::new(store));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Shipment mock API listening on http://{addr}/");

    http::serve(listener, state, shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("Shipment mock API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
