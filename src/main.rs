use std::path::Path;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use redlist_rag::config::AppConfig;
use redlist_rag::logging;
use redlist_rag::server;
use redlist_rag::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(Path::new("logs"));

    let config = AppConfig::from_env().context("invalid configuration")?;
    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::initialize(config);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let app: Router = server::router::router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
