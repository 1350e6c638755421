use super::{
    parser::{DelimitedKeywordParser, KeywordParser},
    prompts::{text_prompt, url_prompt},
};
use kw_interface::{
    llms::CompletionBackend,
    requests::{CompletionError, CompletionRequest, RequestConfig, RequestConfigTrait},
};

/// Asks the completion backend for the keywords in a piece of text or behind a URL.
///
/// Both entry points share the sampling settings in [`RequestConfig`] and the parser.
/// `Ok(None)` means the backend answered but nothing could be parsed out of it.
/// Transport and API failures come back as `Err`.
pub struct KeywordRequester<'a, B: CompletionBackend> {
    backend: &'a B,
    parser: Box<dyn KeywordParser + 'a>,
    pub config: RequestConfig,
}

impl<'a, B: CompletionBackend> KeywordRequester<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            parser: Box::new(DelimitedKeywordParser::default()),
            config: RequestConfig::default(),
        }
    }

    pub fn with_parser<P: KeywordParser + 'a>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub async fn keywords_from_text(
        &self,
        text: &str,
    ) -> crate::Result<Option<Vec<String>>, CompletionError> {
        self.request(text_prompt(text), text).await
    }

    pub async fn keywords_from_url(
        &self,
        url: &str,
    ) -> crate::Result<Option<Vec<String>>, CompletionError> {
        self.request(url_prompt(url), url).await
    }

    async fn request(
        &self,
        prompt: String,
        source: &str,
    ) -> crate::Result<Option<Vec<String>>, CompletionError> {
        let request = CompletionRequest::new(self.backend.model_id(), prompt, &self.config)?;
        let response = self.backend.completion_request(&request).await?;
        crate::debug!("keywords_from: response: {:?}", response);

        match self.parser.parse(&response) {
            Some(keywords) => {
                crate::info!("keywords_from: keywords: {:?}", keywords);
                Ok(Some(keywords))
            }
            None => {
                crate::warn!("keywords_from: no keywords parsed for input: {:?}", source);
                Ok(None)
            }
        }
    }
}

impl<'a, B: CompletionBackend> RequestConfigTrait for KeywordRequester<'a, B> {
    fn config(&mut self) -> &mut RequestConfig {
        &mut self.config
    }
}
