use serde::Deserialize;

/// Ways a single call to the completion service can fail.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, TLS or body read failure
    #[error("completion transport failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The service answered with its own error object
    #[error("completion service rejected the request ({:?}): {}", .0.r#type, .0.message)]
    ApiError(ApiError),
    /// Non-success status whose body is not an error object
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("could not encode completion request: {0}")]
    JSONSerialize(serde_json::Error),
    /// Success status, but the body is not a completion response
    #[error("could not decode completion response: {0}")]
    JSONDeserialize(serde_json::Error),
}

/// Error bodies arrive as `{"error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct WrappedError {
    pub(crate) error: ApiError,
}

pub(crate) fn map_deserialization_error(e: serde_json::Error, bytes: &[u8]) -> ClientError {
    tracing::error!(
        "undecodable completion response body: {}",
        String::from_utf8_lossy(bytes)
    );
    ClientError::JSONDeserialize(e)
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> ClientError {
    tracing::error!("completion request did not encode: {}", e);
    ClientError::JSONSerialize(e)
}

/// The error object inside a rejected request's body.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiError {
    pub message: String,
    pub r#type: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
}
