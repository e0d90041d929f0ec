use crate::{
    llm::{CompletionError, CompletionModel, request::CompletionRequest},
    prompts,
};

/// Generation parameters.
///
/// The defaults are the strict, example-grounded profile: low temperature
/// keeps the output close to the reference material, and the example test is
/// embedded in the system instruction. Raising the temperature and dropping
/// the example yields the looser profile.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub include_examples: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_owned(),
            temperature: 0.2,
            max_tokens: 1500,
            include_examples: true,
        }
    }
}

/// Synthesizes Arium test code from a scenario prompt and the decoded
/// content of an uploaded scene file.
#[derive(Clone)]
pub struct TestGenerator<M> {
    model: M,
    config: GeneratorConfig,
}

impl<M> TestGenerator<M>
where
    M: CompletionModel,
{
    pub fn new(model: M, config: GeneratorConfig) -> Self {
        Self { model, config }
    }

    pub async fn generate(&self, prompt: &str, scene: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            system_prompt: Some(self.system_prompt()),
            prompt: user_prompt(prompt, scene),
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        let response = self.model.complete(request).await?;
        tracing::info!("test generation response received");
        Ok(ensure_fenced(response.text.trim()))
    }

    fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "{}\nAs guidance, refer to the following Arium Framework Syntax:\n{}\n",
            prompts::GENERATOR_ROLE_PROMPT,
            prompts::ARIUM_SYNTAX_REFERENCE,
        );
        if self.config.include_examples {
            prompt.push_str(&format!(
                "\nA complete example test using the framework:\n{}\n",
                prompts::ARIUM_EXAMPLE_TEST,
            ));
        }
        prompt.push_str(
            "Use the material above as a reference for generating the test code, but do not output these instructions or the syntax in the final code.",
        );
        prompt
    }
}

fn user_prompt(prompt: &str, scene: &str) -> String {
    format!(
        "Test Scenario Description:\n{prompt}\n\nScene File Content:\n{scene}\n\nBased on the above, generate complete Unity test code using the Arium framework. Output only the code."
    )
}

/// Wrap bare model output in a C# code fence; already-fenced output is left
/// untouched.
fn ensure_fenced(text: &str) -> String {
    if text.starts_with("```") {
        text.to_owned()
    } else {
        format!("```csharp\n{text}\n```")
    }
}
