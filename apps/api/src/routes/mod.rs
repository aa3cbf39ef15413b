pub mod health;

use axum::{routing::get, Router};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate",
            get(handlers::handle_generate_ack).post(handlers::handle_generate),
        )
        // Path the voice assistant workflow calls.
        .route(
            "/api/vapi/generate",
            get(handlers::handle_generate_ack).post(handlers::handle_generate),
        )
        .with_state(state)
}
