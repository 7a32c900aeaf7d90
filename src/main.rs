use anyhow::Context;
use catalog_service::config::Config;
use catalog_service::lifecycle::{setup_tracing, CatalogSystem};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing();

    let system = CatalogSystem::start(&config).context("Failed to seed the stores")?;
    let app = system.router(config.delete_style);

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    info!(addr = %listener.local_addr()?, "Listening");

    // serve() consumes the router, so its client clones are gone before shutdown below
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await.context("Actor task failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
