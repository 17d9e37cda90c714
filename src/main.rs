//! # MyGarage
//!
//! Entry point: load the configuration, start the car store, serve the HTTP API until
//! Ctrl-C, then shut the store down.

use clap::Parser;
use mygarage::cli::Cli;
use mygarage::config::Config;
use mygarage::http::{self, AppState};
use mygarage::lifecycle::GarageSystem;
use mygarage::model::seed::demo_cars;
use resource_framework::tracing::setup_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let mut config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    cli.apply(&mut config);
    let addr = config.bind_addr().map_err(|e| e.to_string())?;

    let system = GarageSystem::from_config(&config).map_err(|e| e.to_string())?;
    if config.seed_demo_data {
        system
            .seed(demo_cars())
            .await
            .map_err(|e| e.to_string())?;
    }

    let state = AppState::new(system.repository(), config.expiring_window_days);
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("cannot bind {addr}: {e}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    // The router and its repository handles are gone by now, so the actor can stop.
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C, shutting down");
    }
}
