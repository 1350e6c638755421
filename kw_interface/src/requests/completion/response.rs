use serde::{Deserialize, Serialize};

/// A text completion response.
///
/// Every field is optional. The service sometimes answers with partial objects, and
/// deciding whether a response is usable is left to whoever reads `choices`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CompletionResponse {
    /// A unique identifier for the completion.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    /// Unix timestamp (seconds) of when the completion was created.
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<CompletionChoice>>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CompletionChoice {
    /// The generated completion.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

impl CompletionResponse {
    /// Text of the first choice, if the response has one.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .as_ref()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.text.as_deref())
    }
}

impl std::fmt::Display for CompletionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionResponse:")?;
        writeln!(f, "    id: {:?}", self.id)?;
        writeln!(f, "    model: {:?}", self.model)?;
        writeln!(f, "    content: {:?}", self.first_text())?;
        if let Some(usage) = &self.usage {
            write!(
                f,
                "    token_usage: prompt {:?}, completion {:?}, total {:?}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            )
        } else {
            write!(f, "    token_usage: None")
        }
    }
}
