use super::error::CompletionError;
use crate::requests::req_components::RequestConfig;
use serde::{Deserialize, Serialize};

/// Body of a text completion call.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CompletionRequest {
    /// ID of the model to use.
    pub model: String,
    /// The prompt to generate completions for.
    pub prompt: String,
    pub temperature: f32,
    /// The maximum number of tokens to generate in the completion.
    pub max_tokens: u64,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl CompletionRequest {
    pub fn new<M: Into<String>, P: Into<String>>(
        model: M,
        prompt: P,
        config: &RequestConfig,
    ) -> crate::Result<Self, CompletionError> {
        let model = model.into();
        let prompt = prompt.into();
        if model.trim().is_empty() {
            return Err(CompletionError::RequestBuilderError(
                "model id is empty".to_string(),
            ));
        }
        if prompt.trim().is_empty() {
            return Err(CompletionError::RequestBuilderError(
                "prompt is empty".to_string(),
            ));
        }
        Ok(Self {
            model,
            prompt,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
        })
    }
}

impl std::fmt::Display for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionRequest:")?;
        writeln!(f, "  model: {}", self.model)?;
        writeln!(f, "  prompt: {:?}", self.prompt)?;
        writeln!(f, "  temperature: {:?}", self.temperature)?;
        writeln!(f, "  max_tokens: {}", self.max_tokens)?;
        writeln!(f, "  top_p: {:?}", self.top_p)?;
        writeln!(f, "  frequency_penalty: {:?}", self.frequency_penalty)?;
        write!(f, "  presence_penalty: {:?}", self.presence_penalty)
    }
}
