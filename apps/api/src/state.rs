use std::sync::Arc;

use crate::llm_client::ModelProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `VertexAiClient` in production; tests swap in a stub.
    pub model: Arc<dyn ModelProvider>,
}
