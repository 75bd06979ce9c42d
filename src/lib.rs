//! # Sample Application Library
//!
//! Exposes the Axum router and modules so integration tests can create an
//! in-process server without a database or a listening socket.

pub mod config;
pub mod db;
pub mod error;
pub mod guard;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all route modules and middleware.
///
/// Routes are mounted under `prefix` (e.g. `/test`); an empty prefix or `/`
/// mounts them at the root. The caller provides fully built collaborators.
/// This function does NOT start a server.
pub fn create_app(state: AppState, prefix: &str) -> Router {
    let sample_routes = Router::new().merge(routes::sample::router());

    let prefix = prefix.trim_end_matches('/');
    let app = if prefix.is_empty() {
        sample_routes
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, sample_routes)
    } else {
        Router::new().nest(&format!("/{}", prefix), sample_routes)
    };

    app.layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
