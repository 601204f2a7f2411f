//! hello-beanstalk: a single-route greeting HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from the process environment, sets up the Axum router,
//! and starts the HTTP server.

mod config;
mod http;
mod middleware;
mod routes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_LOG_FILTER};
use routes::create_router;

/// hello-beanstalk: a single-route greeting HTTP service
#[derive(Parser, Debug)]
#[command(name = "hello-beanstalk", version, about)]
struct Args {
    /// Log level filter (e.g., "hello_beanstalk=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (infallible: every value has a default)
    let config = AppConfig::from_env();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.log_format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(host = %config.host, port = config.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server; a bind failure propagates and exits the process non-zero
    crate::http::start_server(app, &config).await?;

    Ok(())
}
