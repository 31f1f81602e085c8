mod api_doc;
mod app;
mod config;
mod controller;
mod error;
mod handlers;
mod models;
mod router;
mod routes;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use config::Config;
use controller::{MemoryTodoController, SharedController};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("todo-routes starting");

    let config = Config::from_env()?;
    config.log_startup();

    let controller: SharedController = Arc::new(MemoryTodoController::new());
    router::log_route_table(&config.todos_base_path);

    let app = app::normalize_paths(app::app(&config, controller));

    let listener = TcpListener::bind((config.service_host.as_str(), config.service_port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.service_host, config.service_port
            )
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("todo-routes stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
