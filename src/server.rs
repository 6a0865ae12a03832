//! HTTP server initialization and runtime setup.
//!
//! Builds the registry and application state, binds the listener, and runs
//! the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryUrlRepository::new());
    tracing::info!("URL registry initialized (in-memory, not persisted)");

    let state = AppState::new(repository, config.base_url.clone());
    let app = app_router(state, config.request_timeout_secs);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_endpoints(&addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

fn log_endpoints(addr: &SocketAddr) {
    tracing::info!("URL shortener listening on http://{addr}");
    tracing::info!("Health check: http://{addr}/health");
    tracing::info!("Endpoints:");
    tracing::info!("  POST   /api/shorten          - Create short URL");
    tracing::info!("  GET    /{{shortCode}}          - Redirect to original URL");
    tracing::info!("  GET    /api/analytics/{{code}} - Get URL analytics");
    tracing::info!("  GET    /api/urls             - Get all URLs");
    tracing::info!("  DELETE /api/urls/{{code}}      - Delete short URL");
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
