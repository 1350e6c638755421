// Public modules
pub mod api;

// Internal imports
use crate::requests::{CompletionError, CompletionRequest, CompletionResponse};

// Public exports
pub use api::{
    openai::{builder::OpenAiBackendBuilder, OpenAiBackend, OpenAiConfig},
    ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
};

/// Anything that can answer a [`CompletionRequest`].
///
/// The keyword pipeline only ever talks to the completion service through this trait,
/// so a scripted implementation can stand in for the network in tests.
pub trait CompletionBackend {
    fn model_id(&self) -> &str;

    fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = crate::Result<CompletionResponse, CompletionError>> + Send;
}
