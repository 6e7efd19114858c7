//! # Store API server
//!
//! Serves the Store routes backed by the no-op delegate. Applications embed
//! `store_api::create_router` with their own delegate instead.
//!
//! ## Usage
//!
//! ```bash
//! export PORT=8080
//! export API_BASE_PATH=/v2
//! export LOG_FORMAT=json   # optional
//!
//! store-api
//! ```

use store_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_logging(config.log_format);

    let state = AppState::new(config);
    let addr = state.config.socket_addr()?;

    info!("Environment: {}", state.config.environment);
    info!("Store delegate: {}", state.delegate.delegate_name());

    let base_path = state.config.base_path.clone();
    let is_prod = state.config.is_production();
    let app = routes::create_router(state);

    info!("Store API starting on http://{}", addr);

    if !is_prod {
        info!("Docs: http://{}/docs/store.md", addr);
        info!("Inventory: GET http://{}{}/store/inventory", addr, base_path);
        info!("Place order: POST http://{}{}/store/order", addr, base_path);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Store API stopped");
    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
