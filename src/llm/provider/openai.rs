use std::time::Duration;

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
};
use futures::future::BoxFuture;

use crate::llm::{
    CompletionError, CompletionModel,
    request::{CompletionRequest, CompletionResponse},
};

/// Default bound on any single outbound call. An unbounded wait on the
/// remote service would stall the owning request indefinitely.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI-compatible chat-completion client.
///
/// Constructed once at process start and shared by every call site; the
/// model identifier travels in each [`CompletionRequest`], so the relevance
/// check and the generator can target different models through the same
/// client.
#[derive(Clone)]
pub struct OpenAI {
    client: Client<OpenAIConfig>,
}

impl OpenAI {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self::build(OpenAIConfig::new().with_api_key(api_key), DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn from_url<S: Into<String>>(base_url: S, api_key: S) -> Self {
        Self::from_url_with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn from_url_with_timeout<S: Into<String>>(
        base_url: S,
        api_key: S,
        timeout: Duration,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(api_key);
        Self::build(config, timeout)
    }

    fn build(config: OpenAIConfig, timeout: Duration) -> Self {
        let http_client = reqwest::ClientBuilder::new()
            .user_agent("arium-testgen")
            .timeout(timeout)
            .build()
            .expect("TLS backend cannot be initialized");
        let client = Client::with_config(config).with_http_client(http_client);
        Self { client }
    }
}

impl CompletionModel for OpenAI {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>> {
        Box::pin(async move {
            let mut msgs: Vec<ChatCompletionRequestMessage> = Vec::new();

            if let Some(system_prompt) = &request.system_prompt {
                msgs.push(
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(system_prompt.as_str())
                        .build()?
                        .into(),
                );
            }

            msgs.push(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.prompt.as_str())
                    .build()?
                    .into(),
            );

            let mut create_request_builder = CreateChatCompletionRequestArgs::default();
            if let Some(temperature) = request.temperature {
                create_request_builder.temperature(temperature);
            }
            if let Some(max_tokens) = request.max_tokens {
                create_request_builder.max_tokens(max_tokens);
            }
            let create_request = create_request_builder
                .model(request.model.clone())
                .messages(msgs)
                .build()?;

            tracing::debug!(
                "chat completion request: {}",
                serde_json::to_string(&create_request)?
            );

            let response = self.client.chat().create(create_request).await?;

            let text = response
                .choices
                .first()
                .and_then(|choice| choice.message.content.clone())
                .ok_or_else(|| {
                    CompletionError::Response("completion returned no text choice".to_owned())
                })?;

            Ok(CompletionResponse { text })
        })
    }
}

impl From<async_openai::error::OpenAIError> for CompletionError {
    fn from(error: async_openai::error::OpenAIError) -> Self {
        match error {
            async_openai::error::OpenAIError::Reqwest(e) => e.into(),
            async_openai::error::OpenAIError::ApiError(api_error) => {
                CompletionError::Provider(api_error.to_string())
            }
            async_openai::error::OpenAIError::JSONDeserialize(e, _) => e.into(),
            async_openai::error::OpenAIError::FileSaveError(e) => CompletionError::Other(e),
            async_openai::error::OpenAIError::FileReadError(e) => CompletionError::Other(e),
            async_openai::error::OpenAIError::StreamError(e) => CompletionError::Other(e.to_string()),
            async_openai::error::OpenAIError::InvalidArgument(e) => {
                CompletionError::Request(e.into())
            }
        }
    }
}
