//! Health check and welcome endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Response for GET /.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    #[serde(rename = "WELCOME")]
    pub welcome: String,
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET / - Greeting.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        welcome: "to my Backend Software for the Book Company".to_string(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
