//! HTTP API Layer
//!
//! This crate exposes the premium rating engine as a REST API using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote and health endpoints
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(engine, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use domain_rating::RatingEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, quote};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RatingEngine>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Rating engine used to price quote requests
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: Arc<RatingEngine>, config: ApiConfig) -> Router {
    let state = AppState { engine, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Quote routes
    let quote_routes = Router::new().route("/", post(quote::create_quote));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1/quotes", quote_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
