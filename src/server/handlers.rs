use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
};
use serde::Serialize;

use crate::{
    llm::CompletionModel,
    server::{error::SubmitError, state::AppState},
};

/// File types accepted as scene descriptions.
const ALLOWED_EXTENSIONS: [&str; 3] = [".yaml", ".yml", ".unity"];

/// Upper bound on the trimmed prompt length.
pub const MAX_PROMPT_CHARS: usize = 128_000;

/// Final JSON payload: the generated test code.
#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub answer: String,
}

/// Renders the home page.
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Handles submission of prompts and scene files to generate tests.
///
/// Guards run in order and short-circuit to a JSON error; both outbound
/// calls stay strictly sequential, and generation never starts unless the
/// relevance gate passed.
pub async fn submit<M>(
    State(state): State<AppState<M>>,
    multipart: Multipart,
) -> Result<Json<GenerationResponse>, SubmitError>
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    let raw = read_submission(multipart).await?;

    let (file_name, file_bytes) = match (raw.file_name, raw.file_bytes) {
        (Some(name), Some(bytes)) if !name.is_empty() => (name, bytes),
        _ => {
            tracing::warn!("submission rejected: no file attached");
            return Err(SubmitError::MissingFile);
        }
    };

    if !has_allowed_extension(&file_name) {
        tracing::warn!(%file_name, "submission rejected: unsupported file type");
        return Err(SubmitError::UnsupportedFileType);
    }

    let scene = match String::from_utf8(file_bytes.to_vec()) {
        Ok(scene) => scene,
        Err(_) => {
            tracing::warn!(%file_name, "submission rejected: file content is not UTF-8");
            return Err(SubmitError::UnreadableFile);
        }
    };

    let prompt = raw.prompt.trim().to_owned();
    tracing::info!(%file_name, prompt = truncate(&prompt, 120), "received submission");

    if prompt.is_empty() {
        tracing::warn!("submission rejected: no prompt provided");
        return Err(SubmitError::EmptyPrompt);
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        tracing::warn!("submission rejected: prompt is too long");
        return Err(SubmitError::PromptTooLong);
    }

    // Fail closed: an unanswered relevance check must not let a prompt
    // through to generation.
    let related = match state.classifier.is_test_related(&prompt).await {
        Ok(related) => related,
        Err(error) => {
            tracing::warn!(%error, "relevance check failed");
            false
        }
    };
    if !related {
        tracing::info!("submission rejected: prompt not related to test generation");
        return Err(SubmitError::NotTestRelated);
    }

    let answer = state
        .generator
        .generate(&prompt, &scene)
        .await
        .map_err(|error| {
            tracing::error!(%error, "test generation failed");
            SubmitError::Generation(error)
        })?;

    Ok(Json(GenerationResponse { answer }))
}

struct RawSubmission {
    prompt: String,
    file_name: Option<String>,
    file_bytes: Option<Bytes>,
}

async fn read_submission(mut multipart: Multipart) -> Result<RawSubmission, SubmitError> {
    let mut prompt = String::new();
    let mut file_name = None;
    let mut file_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| SubmitError::BadRequest(error.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "prompt" => {
                prompt = field
                    .text()
                    .await
                    .map_err(|error| SubmitError::BadRequest(error.to_string()))?;
            }
            "file" => {
                file_name = Some(field.file_name().unwrap_or_default().to_owned());
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|error| SubmitError::BadRequest(error.to_string()))?,
                );
            }
            _ => {}
        }
    }

    Ok(RawSubmission {
        prompt,
        file_name,
        file_bytes,
    })
}

fn has_allowed_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
