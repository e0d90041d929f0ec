//! HTTP error handling and response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::llm::CompletionError;
use crate::server::handlers::MAX_PROMPT_CHARS;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("no file attached")]
    MissingFile,

    #[error("unsupported file type")]
    UnsupportedFileType,

    #[error("file content is not valid UTF-8")]
    UnreadableFile,

    #[error("empty prompt")]
    EmptyPrompt,

    #[error("prompt exceeds {MAX_PROMPT_CHARS} characters")]
    PromptTooLong,

    #[error("prompt not related to test generation")]
    NotTestRelated,

    #[error("malformed submission: {0}")]
    BadRequest(String),

    #[error("completion error: {0}")]
    Generation(#[from] CompletionError),
}

impl SubmitError {
    /// User-facing message. Client errors are specific; the 500 class stays
    /// generic so upstream service detail never reaches the caller.
    fn message(&self) -> String {
        match self {
            Self::MissingFile => "Attach a .unity or .yaml file.".to_owned(),
            Self::UnsupportedFileType => "Please upload a YAML or Unity file.".to_owned(),
            Self::UnreadableFile => {
                "Unable to read file content. Please ensure it is a valid YAML or Unity file."
                    .to_owned()
            }
            Self::EmptyPrompt => "No prompt provided.".to_owned(),
            Self::PromptTooLong => {
                format!("Prompt is too long. Please limit to {MAX_PROMPT_CHARS} characters.")
            }
            Self::NotTestRelated => "This prompt is not related to test generation.".to_owned(),
            Self::BadRequest(detail) => detail.clone(),
            Self::Generation(_) => "An internal error occurred. Please try again later.".to_owned(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}
