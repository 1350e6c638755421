use super::*;
use mockito::Matcher;

fn backend_for(server: &mockito::ServerGuard) -> OpenAiBackend {
    KwInterface::openai()
        .model("test-instruct")
        .with_api_host(server.url())
        .with_api_key("sk-test")
        .init()
        .unwrap()
}

#[tokio::test]
async fn test_completion_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-instruct",
            "prompt": "prompt: Apache Arrow with Neo4j",
            "max_tokens": 60
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "cmpl-6nZuAgu4xaX324HJTuf1A2StIvD00",
                "object": "text_completion",
                "created": 1677274110,
                "model": "test-instruct",
                "choices": [{
                    "finish_reason": "stop",
                    "index": 0,
                    "logprobs": null,
                    "text": "\nanswers: Apache Arrow, Neo4j"
                }],
                "usage": {"completion_tokens": 7, "prompt_tokens": 12, "total_tokens": 19}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let backend = backend_for(&server);
    let req = CompletionRequest::new(
        backend.model_id(),
        "prompt: Apache Arrow with Neo4j",
        &RequestConfig::default(),
    )
    .unwrap();
    let res = backend.completion_request(&req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.first_text(), Some("\nanswers: Apache Arrow, Neo4j"));
    assert_eq!(res.usage.and_then(|u| u.total_tokens), Some(19));
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completions")
        .with_status(401)
        .with_body(
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let backend = backend_for(&server);
    let req = CompletionRequest::new("test-instruct", "hello", &RequestConfig::default()).unwrap();
    let err = backend.completion_request(&req).await.unwrap_err();

    // One attempt only, no retry on failure.
    mock.assert_async().await;
    match err {
        CompletionError::ClientError(ClientError::ApiError(api_error)) => {
            assert_eq!(api_error.code.as_deref(), Some("invalid_api_key"));
            assert_eq!(api_error.message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_status_keeps_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/completions")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let backend = backend_for(&server);
    let req = CompletionRequest::new("test-instruct", "hello", &RequestConfig::default()).unwrap();
    let err = backend.completion_request(&req).await.unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::UnexpectedStatus { status: 502, ref body }) if body == "bad gateway"
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let backend = backend_for(&server);
    let req = CompletionRequest::new("test-instruct", "hello", &RequestConfig::default()).unwrap();
    let err = backend.completion_request(&req).await.unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::JSONDeserialize(_))
    ));
}

#[tokio::test]
async fn test_port_is_joined_to_host() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completions")
        .with_status(200)
        .with_body(json!({"choices": [{"text": "\nanswers: Rust"}]}).to_string())
        .expect(1)
        .create_async()
        .await;

    let backend = KwInterface::openai()
        .with_api_host("http://127.0.0.1")
        .with_api_port(server.socket_address().port().to_string())
        .with_api_key("sk-test")
        .init()
        .unwrap();
    let req =
        CompletionRequest::new(backend.model_id(), "prompt: Rust", &RequestConfig::default())
            .unwrap();
    let res = backend.completion_request(&req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.first_text(), Some("\nanswers: Rust"));
}
