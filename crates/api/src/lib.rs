//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Aggregate query endpoints (dashboard, quick stats) per box kind
//! - Quick creation of draft boxes
//! - An in-memory store standing in for the persistence collaborator

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
