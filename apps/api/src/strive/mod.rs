// Strive: mentor advice flow served over HTTP.
// All model calls go through llm_client — no direct Vertex AI calls here.

pub mod flow;
pub mod handlers;
pub mod prompts;

/// Name under which the flow is registered and routed.
pub const FLOW_NAME: &str = "striveFlow";
