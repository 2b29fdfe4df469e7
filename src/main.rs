use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mailgen_server::app;
use mailgen_server::config::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_file()?;
    let state = AppState::new(&config).context("failed to build generation client")?;

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!("Server running on http://{}", address);
    info!("OpenAPI document: http://{}/api-docs/openapi.json", address);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no handler available; run until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
