//! # bank-backoffice
//! HTTP server managing customers and their bank accounts.
//!
//! ## Configuration
//! Environment variables `BANK_HOST`, `BANK_PORT`, `BANK_CORS_ORIGIN`, `LOG_LEVEL`, `LOG_FORMAT`
//! and `RUST_LOG`. See [`bank_backoffice::config::AppConfig`].

#![deny(missing_docs)]

use anyhow::Context;
use bank_backoffice::{
    config::AppConfig,
    http::{self, AppState},
    telemetry,
};
use tokio::net::TcpListener;
use tracing::info;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("load configuration")?;
    telemetry::init(&config);

    let app = http::router(AppState::in_memory(), &config.cors_origin)?;

    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "bank back-office listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    Ok(())
}
