use super::{OpenAiBackend, OpenAiConfig, DEFAULT_COMPLETION_MODEL};
use crate::llms::api::config::{ApiConfig, LlmApiConfigTrait};

pub struct OpenAiBackendBuilder {
    pub config: OpenAiConfig,
    pub model: String,
}

impl Default for OpenAiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }
}

impl OpenAiBackendBuilder {
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn org_id<S: Into<String>>(mut self, org_id: S) -> Self {
        self.config = self.config.with_org_id(org_id);
        self
    }

    pub fn init(self) -> crate::Result<OpenAiBackend> {
        OpenAiBackend::new(self.config, self.model)
    }
}

impl LlmApiConfigTrait for OpenAiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }
}
