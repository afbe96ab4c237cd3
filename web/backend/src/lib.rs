pub mod handlers;
pub mod models;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/path", get(handlers::find_path))
        .route("/api/stats", get(handlers::get_stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
