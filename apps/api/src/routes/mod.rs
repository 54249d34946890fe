pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(extraction::handle_upload))
        .route("/api/analyze", post(analysis::handle_analyze))
        .route("/api/analyze/resume", post(analysis::handle_review))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
