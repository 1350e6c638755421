use kw_interface::{
    llms::{ClientError, CompletionBackend},
    requests::{CompletionChoice, CompletionError, CompletionRequest, CompletionResponse},
};
use std::sync::Mutex;

/// Completion backend that answers from a script instead of the network.
///
/// A reply is picked when the prompt's input line contains its needle. Prompts that match
/// nothing get a response with an empty `choices` list.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    replies: Vec<(String, String)>,
    failures: Vec<String>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn reply_to(mut self, needle: &str, text: &str) -> Self {
        self.replies.push((needle.to_string(), text.to_string()));
        self
    }

    pub(crate) fn fail_on(mut self, needle: &str) -> Self {
        self.failures.push(needle.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

/// The caller's input: whatever follows the last `prompt: ` or `url: ` line.
fn input_of(prompt: &str) -> &str {
    let prompt = prompt.trim_end();
    ["\nprompt: ", "\nurl: "]
        .iter()
        .filter_map(|marker| prompt.rfind(marker).map(|i| i + marker.len()))
        .max()
        .map_or(prompt, |start| &prompt[start..])
}

impl CompletionBackend for ScriptedBackend {
    fn model_id(&self) -> &str {
        "scripted"
    }

    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());
        let input = input_of(&request.prompt);

        if self.failures.iter().any(|needle| input.contains(needle.as_str())) {
            return Err(CompletionError::ClientError(ClientError::UnexpectedStatus {
                status: 500,
                body: format!("scripted failure for {input}"),
            }));
        }

        let choices = self
            .replies
            .iter()
            .find(|(needle, _)| input.contains(needle.as_str()))
            .map(|(_, text)| CompletionChoice {
                text: Some(text.clone()),
                index: Some(0),
                finish_reason: Some("stop".to_string()),
            })
            .into_iter()
            .collect();

        Ok(CompletionResponse {
            model: Some(self.model_id().to_string()),
            choices: Some(choices),
            ..Default::default()
        })
    }
}
