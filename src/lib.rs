//! Caching gateway in front of a text-completion API and an image-labeling
//! API. Completions are cached by prompt fingerprint; image labels are
//! turned into product suggestions by a fixed rule table.

pub mod cache;
pub mod classifier;
pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::state::AppState;

// creating the router with routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/generate", post(handlers::generate_handler))
        .route("/api/suggestions", post(handlers::suggestions_handler))
        .with_state(state)
}
