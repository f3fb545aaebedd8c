//! Route definitions for the HTTP API.

pub mod authors;
pub mod books;
pub mod health;
pub mod publications;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(books::routes())
        .merge(authors::routes())
        .merge(publications::routes())
        .with_state(state)
}
