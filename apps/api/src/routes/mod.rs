pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::strive::{handlers, FLOW_NAME};

/// Registers every flow under `POST /<flowName>`, plus the health probe.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(&format!("/{FLOW_NAME}"), post(handlers::handle_strive_flow))
        .with_state(state)
}
