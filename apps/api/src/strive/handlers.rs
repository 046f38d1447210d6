//! Axum route handler for the strive flow.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::strive::flow::{run_strive_flow, StriveInput};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response envelopes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FlowRequest<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct FlowResponse<T> {
    pub result: T,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /striveFlow
///
/// Body `{"data": {"role", "problem"}}` → `{"result": "<model text>"}`.
/// Schema failures are rejected here, before the model is touched.
pub async fn handle_strive_flow(
    State(state): State<AppState>,
    body: Result<Json<FlowRequest<StriveInput>>, JsonRejection>,
) -> Result<Json<FlowResponse<String>>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let result = run_strive_flow(state.model.as_ref(), &request.data).await?;

    Ok(Json(FlowResponse { result }))
}
