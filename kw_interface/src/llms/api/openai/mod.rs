pub mod builder;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
};
use crate::{
    llms::CompletionBackend,
    requests::{CompletionError, CompletionRequest, CompletionResponse},
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// Default v1 API base url
pub const OPENAI_API_HOST: &str = "api.openai.com/v1";
/// Organization header
pub const OPENAI_ORGANIZATION_HEADER: &str = "OpenAI-Organization";
/// Instruct model served on the legacy `/completions` endpoint
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

pub struct OpenAiBackend {
    pub(crate) client: ApiClient<OpenAiConfig>,
    pub model: String,
}

impl OpenAiBackend {
    pub fn new(mut config: OpenAiConfig, model: String) -> crate::Result<Self> {
        config.api_config.api_key = Some(config.api_config.load_api_key()?);
        crate::info!(
            "Completion backend ready: {}{} with model {}",
            config.api_config.base_url(),
            config.completion_path,
            model
        );
        Ok(Self {
            client: ApiClient::new(config),
            model,
        })
    }
}

impl CompletionBackend for OpenAiBackend {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError> {
        crate::debug!("{}", request);
        let res: CompletionResponse = self
            .client
            .post(&self.client.config.completion_path, request)
            .await?;
        crate::debug!("{}", res);
        Ok(res)
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_config: ApiConfig,
    pub org_id: String,
    pub completion_path: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: OPENAI_API_HOST.to_string(),
                port: None,
                api_key: None,
                api_key_env_var: "OPENAI_API_KEY".to_string(),
            },
            org_id: Default::default(),
            completion_path: "/completions".to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// To use a different organization id other than default
    pub fn with_org_id<S: Into<String>>(mut self, org_id: S) -> Self {
        self.org_id = org_id.into();
        self
    }
}

impl ApiConfigTrait for OpenAiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if !self.org_id.is_empty() {
            if let Ok(header_value) = HeaderValue::from_str(self.org_id.as_str()) {
                headers.insert(OPENAI_ORGANIZATION_HEADER, header_value);
            } else {
                crate::error!("Failed to create header value from org_id value");
            }
        }
        if let Some(api_key) = self.api_key() {
            if let Ok(header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.base_url(), path)
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }
}
