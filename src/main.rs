/// NASA APOD proxy: HTML pages and a documented JSON API over the APOD endpoint
mod clients;
mod config;
mod docs;
mod domain;
mod errors;
mod handlers;
mod routes;
mod services;
#[cfg(test)]
mod testing;
mod utils;
mod views;

use crate::clients::NasaClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::ApodService;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!(debug = config.debug, "Configuration loaded successfully");
    if config.uses_default_secret() && !config.debug {
        warn!("SECRET_KEY is not set; using the development default");
    }

    // Initialize clients
    let nasa_client = NasaClient::new(
        config.nasa_apod_url.clone(),
        config.nasa_api_key.clone(),
        config.upstream_timeout,
    )?;
    info!(url = %nasa_client.apod_url(), timeout = ?config.upstream_timeout, "APOD client ready");

    // Initialize application state
    let state = AppState {
        apod_service: Arc::new(ApodService::new(nasa_client)),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("nasa_apod service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
