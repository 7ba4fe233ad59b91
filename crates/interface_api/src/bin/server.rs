//! Motor Rating Engine - API Server Binary
//!
//! This binary starts the HTTP API server for the premium rating engine.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin rating-api
//!
//! # Run with environment variables
//! RATING_HOST=0.0.0.0 RATING_PORT=8080 cargo run --bin rating-api
//! ```
//!
//! # Environment Variables
//!
//! * `RATING_HOST` - Server host (default: 0.0.0.0)
//! * `RATING_PORT` - Server port (default: 8080)
//! * `RATING_CURRENCY` - ISO 4217 quoting currency (default: USD)
//! * `RATING_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use core_kernel::Currency;
use domain_rating::RatingEngine;
use interface_api::{config::ApiConfig, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the rating engine,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if the configured address cannot be parsed or the
/// server fails to bind to it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        currency = %config.currency,
        "Starting Motor Rating Engine API Server"
    );

    // Build the rating engine with the standard rate table and rule set
    let engine = Arc::new(RatingEngine::new().with_currency(config.currency));

    // Create the API router
    let app = create_router(engine, config.clone());

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual `RATING_*` variables, then to defaults, so a
/// bare `cargo run` always starts a working server.
fn load_config() -> ApiConfig {
    // Try to load from environment with RATING_ prefix
    ApiConfig::from_env().unwrap_or_else(|_| {
        // Fall back to individual env vars or defaults
        ApiConfig {
            host: std::env::var("RATING_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("RATING_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("RATING_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
            currency: std::env::var("RATING_CURRENCY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(Currency::USD),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
