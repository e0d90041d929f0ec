use crate::{
    llm::{CompletionError, CompletionModel, request::CompletionRequest},
    prompts,
};

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub model: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_owned(),
        }
    }
}

/// Asks the completion backend whether a prompt concerns test generation.
///
/// The reply is normalized (trimmed, lowercased) and only a literal "yes"
/// counts as related. Transport and service failures are surfaced to the
/// caller, which owns the fail-closed policy decision.
#[derive(Clone)]
pub struct RelevanceClassifier<M> {
    model: M,
    config: ClassifierConfig,
}

impl<M> RelevanceClassifier<M>
where
    M: CompletionModel,
{
    pub fn new(model: M, config: ClassifierConfig) -> Self {
        Self { model, config }
    }

    pub async fn is_test_related(&self, prompt: &str) -> Result<bool, CompletionError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            system_prompt: Some(prompts::CLASSIFIER_SYSTEM_PROMPT.to_owned()),
            prompt: format!(
                "Is the following prompt related to test generation?\n\nPrompt: {prompt}"
            ),
            temperature: Some(0.0),
            max_tokens: None,
        };

        let response = self.model.complete(request).await?;
        let answer = response.text.trim().to_lowercase();
        tracing::info!(%answer, "prompt relevance check response");
        Ok(answer == "yes")
    }
}
