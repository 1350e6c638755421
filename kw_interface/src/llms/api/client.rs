use super::{
    config::ApiConfigTrait,
    error::{map_deserialization_error, map_serialization_error, ClientError, WrappedError},
};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<I, O>(&self, path: &str, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let serialized_request =
            serde_json::to_string(&request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request)
            .build()?;
        self.execute(request).await
    }

    /// Execute a HTTP request once. There is no retry: a failed call fails the caller.
    async fn execute<O>(&self, request: reqwest::Request) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // Deserialize response body from either error object or actual response object
        if !status.is_success() {
            return match serde_json::from_slice::<WrappedError>(bytes.as_ref()) {
                Ok(wrapped_error) => {
                    crate::warn!("API error {}: {}", status, wrapped_error.error.message);
                    Err(ClientError::ApiError(wrapped_error.error))
                }
                Err(_) => Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                }),
            };
        }

        // Deserialize once into a generic Value
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        let pretty_json = serde_json::to_string_pretty(&value).map_err(map_serialization_error)?;
        crate::trace!("Serialized response: {}", pretty_json);

        serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))
    }
}
