use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/agreement", post(handlers::agreement))
        .route("/case-analysis", post(handlers::case_analysis))
        .route("/nearby", get(handlers::nearby))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
