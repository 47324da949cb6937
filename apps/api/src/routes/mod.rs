pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-roadmap", post(handlers::handle_generate_roadmap))
        .route("/api/v1/roadmap", post(handlers::handle_generate_roadmap))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
