//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    evaluation::{update_score, reset_scores, download_evaluation, api_evaluation},
    network::{download_edges, api_network},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                 get(dashboard))
        .route("/evaluation",       post(update_score))
        .route("/evaluation/reset", post(reset_scores))

        // Downloads
        .route("/download/edges",      get(download_edges))
        .route("/download/evaluation", get(download_evaluation))

        // API endpoints
        .route("/api/network",    get(api_network))
        .route("/api/evaluation", get(api_evaluation))
        .route("/health",         get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
