//! Takeoff - Binary Entry Point
//!
//! Opens the schedule and serves it over HTTP to the desktop frontend.

use std::sync::Arc;

use takeoff::api::{create_router, AppState};
use takeoff::{Schedule, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = ServerConfig::from_env();

    let schedule = Arc::new(tokio::task::spawn_blocking(Schedule::from_env).await?);
    tracing::info!(
        data_dir = %schedule.storage().config().data_dir().display(),
        "schedule opened"
    );

    let app = create_router(Arc::new(AppState::new(schedule)));
    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    tracing::info!(addr = %server_config.addr, "{} {} listening", takeoff::NAME, takeoff::VERSION);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
