//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind the listener and serve the router until shutdown.
///
/// A bind failure (port in use, permission denied) is fatal and propagates
/// to the caller; there is no retry and no fallback port. After a successful
/// bind a single startup line is logged with the resolved URL.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::new(config.host, config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("App running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
