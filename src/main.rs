use order_fulfillment::catalog::Catalog;
use order_fulfillment::config::Config;
use order_fulfillment::lifecycle::{setup_tracing, FulfillmentSystem};
use order_fulfillment::server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting order fulfillment service");

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path).map_err(|e| {
            error!(error = %e, "Failed to load catalog");
            e.to_string()
        })?,
        None => {
            info!("CATALOG_PATH not set, using built-in catalog");
            Catalog::builtin()
        }
    };

    let system = FulfillmentSystem::new(catalog, config.allocator_buffer);
    let state = AppState::new(
        system.client.clone(),
        Arc::clone(system.catalog()),
        config.request_timeout(),
    );
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    // The router (and its client clone) is gone once serve returns.
    system.shutdown().await?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
