use anyhow::Context;
use tokio::net::TcpListener;

use crate::api::create_router;
use crate::config::ServerConfig;
use crate::db::TaskStore;

/// Open the store and serve the API until Ctrl-C.
pub async fn run(config: &ServerConfig) -> anyhow::Result<()> {
    let store = TaskStore::open(&config.db_path)
        .with_context(|| format!("opening database {}", config.db_path.display()))?;
    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("binding {}", config.addr()))?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Serve on an already-bound listener. Used when the caller picks the port.
pub async fn serve(listener: TcpListener, store: TaskStore) -> std::io::Result<()> {
    axum::serve(listener, create_router(store)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
