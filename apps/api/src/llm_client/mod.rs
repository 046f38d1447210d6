//! LLM Client — the single point of entry for all generative-model calls in Strive.
//!
//! No other module may call Vertex AI directly. Flows depend on the
//! `ModelProvider` trait; `VertexAiClient` is the production backend.
//!
//! Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::llm_client::auth::TokenSource;

pub mod auth;
pub mod prompts;

/// The model used for all flows in Strive.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("LLM returned no candidates")]
    EmptyContent,
}

/// A provider-neutral generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Auxiliary documents appended to the user message.
    pub context: Vec<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Builds a single-candidate response carrying `text`.
    #[cfg(test)]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
        }
    }

    /// Concatenated text parts of the first candidate.
    /// `None` when the provider returned no candidates at all.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        Some(
            candidate
                .content
                .iter()
                .flat_map(|c| c.parts.iter())
                .filter_map(|p| p.text.as_deref())
                .collect(),
        )
    }
}

/// A backend able to run one generation request.
///
/// Carried in `AppState` as `Arc<dyn ModelProvider>`.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VertexRequest<'a> {
    contents: Vec<VertexContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct VertexContent<'a> {
    role: &'a str,
    parts: Vec<VertexPart>,
}

#[derive(Debug, Serialize)]
struct VertexPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct VertexError {
    error: VertexErrorBody,
}

#[derive(Debug, Deserialize)]
struct VertexErrorBody {
    message: String,
}

/// Vertex AI `generateContent` backend.
/// One outbound call per request; failures are returned as-is, never retried.
/// The bearer token is fetched from `tokens` on every request.
#[derive(Clone)]
pub struct VertexAiClient {
    client: Client,
    base_url: String,
    project: String,
    location: String,
    tokens: Arc<dyn TokenSource>,
}

impl VertexAiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenSource>) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: config.vertex_api_base.clone(),
            project: config.gcloud_project.clone(),
            location: config.gcloud_location.clone(),
            tokens,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url, self.project, self.location, model
        )
    }
}

#[async_trait]
impl ModelProvider for VertexAiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let token = self.tokens.bearer_token().await?;

        let mut parts = vec![VertexPart {
            text: request.prompt.clone(),
        }];
        if !request.context.is_empty() {
            parts.push(VertexPart {
                text: prompts::render_context(&request.context),
            });
        }

        let body = VertexRequest {
            contents: vec![VertexContent { role: "user", parts }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<VertexError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let generated: GenerateResponse = serde_json::from_str(&body)?;

        if generated.candidates.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        if let Some(reason) = generated.candidates[0].finish_reason.as_deref() {
            if reason != "STOP" {
                warn!("Candidate finished with reason {reason}");
            }
        }

        if let Some(usage) = &generated.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, input_tokens={}, output_tokens={}",
                request.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(generated)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}
