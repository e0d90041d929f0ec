use futures::future::BoxFuture;
use thiserror::Error;

pub mod provider;
pub mod request;

pub use request::{CompletionRequest, CompletionResponse};

/// A chat-completion backend.
///
/// The service talks to the remote API exclusively through this trait, so
/// handlers can be exercised against a scripted model in tests.
pub trait CompletionModel {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>>;
}

// Errors
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("HttpError: {0}")]
    Http(#[from] reqwest::Error),

    /// Json error (e.g.: serialization, deserialization)
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),

    /// Error building the completion request
    #[error("RequestError: {0}")]
    Request(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Error parsing the completion response
    #[error("ResponseError: {0}")]
    Response(String),

    /// Error returned by the completion model provider
    #[error("ProviderError: {0}")]
    Provider(String),

    /// Other error
    #[error("OtherError: {0}")]
    Other(String),
}
