//! Axum router configuration with middleware.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::interactions;
use crate::state::AppState;

/// Build the interactions endpoint router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(interactions::handle_interaction))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
