#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod llms;
pub mod logging;
pub mod requests;

pub use llms::api::LlmApiConfigTrait;

pub struct KwInterface {}

impl KwInterface {
    pub fn openai() -> llms::api::openai::builder::OpenAiBackendBuilder {
        llms::api::openai::builder::OpenAiBackendBuilder::default()
    }
}
