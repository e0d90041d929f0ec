use serde::Serialize;

/// A single outbound chat-completion call.
///
/// Built fresh for every call site (relevance check and generation each
/// assemble their own) and never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// The text produced by the remote model for one request.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub text: String,
}
