pub mod keywords;
pub mod pipeline;
pub mod records;

#[cfg(test)]
pub(crate) mod testing;

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub use keywords::{DelimitedKeywordParser, KeywordParser, KeywordRequester};
pub use kw_interface::{
    llms::{CompletionBackend, OpenAiBackend, OpenAiBackendBuilder},
    logging::{LoggingConfig, LoggingConfigTrait},
    requests::{RequestConfig, RequestConfigTrait},
    KwInterface, LlmApiConfigTrait,
};
pub use kw_utils::{extract_urls, load_table, save_table, TableRow};
pub use pipeline::{export_keywords, ExportSummary, PipelineConfig};
pub use records::{EmptyKeywordPolicy, RecordBuilder, RecordError, TargetColumns};

/// Entry point holding the completion backend every keyword request goes through.
pub struct KwClient<B: CompletionBackend> {
    pub backend: B,
}

impl KwClient<OpenAiBackend> {
    /// Creates a new instance of the [`OpenAiBackendBuilder`]. Call `init` on it and pass the backend to [`KwClient::new`].
    pub fn openai() -> OpenAiBackendBuilder {
        KwInterface::openai()
    }
}

impl<B: CompletionBackend> KwClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn keyword_requester(&self) -> KeywordRequester<'_, B> {
        KeywordRequester::new(&self.backend)
    }

    pub fn record_builder(&self, columns: TargetColumns) -> RecordBuilder<'_, B> {
        RecordBuilder::new(&self.backend, columns)
    }

    pub async fn export_keywords(&self, config: &PipelineConfig) -> crate::Result<ExportSummary> {
        pipeline::export_keywords(&self.backend, config).await
    }
}
