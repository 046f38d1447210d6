//! Strive flow — mentor advice for a workplace difficulty.
//!
//! Flow: (role, problem) → assemble_prompt → one model call → response text.
//!
//! The model is asked for a JSON document, but the shape is not enforced:
//! whatever text comes back is returned unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, GenerateRequest, LlmError, ModelProvider, MODEL};
use crate::strive::prompts::{mentor_prompt, ADVISORY_RULES};
use crate::strive::FLOW_NAME;

/// Near-maximal sampling randomness.
pub const TEMPERATURE: f32 = 1.0;

/// Flow input. Both fields are required strings; nothing else is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StriveInput {
    pub role: String,
    pub problem: String,
}

/// The shape the prompt asks the model to answer in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StriveAdvice {
    pub symptom: String,
    pub measure: String,
    pub follow_up: String,
    pub identified_symptoms: Vec<String>,
}

/// The mentor prompt plus the static rule corpus sent alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    pub prompt: String,
    pub context: &'static str,
}

/// Pure. Embeds `role` and `problem` verbatim; the context is identical on every call.
pub fn assemble_prompt(role: &str, problem: &str) -> AssembledPrompt {
    AssembledPrompt {
        prompt: mentor_prompt(role, problem),
        context: ADVISORY_RULES,
    }
}

/// Best-effort decode of a model answer into `StriveAdvice`.
pub fn parse_advice(text: &str) -> Option<StriveAdvice> {
    serde_json::from_str(strip_json_fences(text)).ok()
}

/// Runs the flow: exactly one model call, failures propagated as-is.
pub async fn run_strive_flow(
    model: &dyn ModelProvider,
    input: &StriveInput,
) -> Result<String, AppError> {
    let span = info_span!("flow", flow = FLOW_NAME, invocation_id = %Uuid::new_v4());

    async move {
        let assembled = assemble_prompt(&input.role, &input.problem);
        let request = GenerateRequest {
            model: MODEL.to_string(),
            prompt: assembled.prompt,
            context: vec![assembled.context.to_string()],
            temperature: TEMPERATURE,
        };

        info!("Invoking {MODEL} (temperature {TEMPERATURE})");
        let response = model.generate(&request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;

        if parse_advice(&text).is_some() {
            debug!("Model answer matches the advice shape");
        } else {
            debug!("Model answer is not advice-shaped JSON; returning it unchanged");
        }

        Ok::<_, AppError>(text)
    }
    .instrument(span)
    .await
}
