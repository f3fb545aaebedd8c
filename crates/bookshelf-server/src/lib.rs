//! bookshelf-server: HTTP API server for the Bookshelf catalog
//!
//! This crate provides:
//! - REST endpoints for books, authors and publications
//! - JSON error responses (`{"error": "..."}`) with real status codes
//! - Request tracing and request-id propagation
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers reach the record stores through
//! [`AppState`], which is built once at startup around either the
//! PostgreSQL or the in-memory backend. The middleware stack covers:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookshelf_server::{app, AppState};
//! use bookshelf_store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()));
//! let router = app(state, "*")?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{propagate_request_id, request_id_layer};

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookshelf_core;
pub use bookshelf_store;

/// Build the full application: routes plus the middleware stack.
pub fn app(state: AppState, cors_allowed_origins: &str) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(|s| {
            s.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin {:?}", s.trim()),
            })
        })
        .collect::<Result<Vec<http::HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
