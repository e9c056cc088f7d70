// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::refresh_scheduler::RefreshScheduler;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::influx_repository::InfluxRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_events, dashboard_page};
use crate::presentation::shell::DashboardShell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create the data store handle (infrastructure layer), reused by every cycle
    let repository = Arc::new(InfluxRepository::new(&config.influx)?);

    // Create the poll cycle (application layer)
    let service = DashboardService::new(repository);
    let scheduler = RefreshScheduler::new(service, config.refresh.interval());

    // The shell moves into the scheduler; the HTTP side only reads its views
    let shell = DashboardShell::new();
    let state = Arc::new(AppState {
        views: shell.subscribe(),
    });

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let scheduler_task = tokio::spawn(scheduler.run(
        move |report| shell.apply(report),
        async move {
            let _ = stop_rx.await;
        },
    ));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/events", get(dashboard_events))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!(
        "Starting sensor dashboard on {} (refresh every {}s)",
        addr,
        config.refresh.interval_secs
    );

    // Stopping the scheduler drops the shell, which closes open event
    // streams and lets the server drain.
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown requested");
            let _ = stop_tx.send(());
        })
        .await?;

    scheduler_task.await?;
    tracing::info!("Sensor dashboard stopped");

    Ok(())
}
