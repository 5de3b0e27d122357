//! Wire-level tests for the responder's HTTP binding.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use toolcall_mock::{server, ChatResponse, ResponderEngine, ResponsePayload};

fn app() -> axum::Router {
    server::router(ResponderEngine::default())
}

async fn post_chat(body: Value) -> ChatResponse {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/chat/completions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_probe_responds() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_body_falls_back_to_defaults() {
    let resp = post_chat(json!({})).await;
    assert_eq!(resp.model, "unspecified");
    assert!(resp.id.starts_with("chatcmpl-"));
    assert!(matches!(resp.result, ResponsePayload::DirectAnswer { .. }));
    assert_eq!(resp.usage.total_tokens, 0);
}

#[tokio::test]
async fn first_pass_requests_tool_invocation() {
    let resp = post_chat(json!({
        "model": "gpt-4",
        "messages": [{"role": "user", "content": "What is 2+2?"}],
        "tools": [{
            "name": "use_calculator",
            "description": "Evaluate a math expression",
            "parameters": {
                "type": "object",
                "properties": {"expression": {"type": "string"}},
                "required": ["expression"]
            }
        }],
        "tool_choice": "auto"
    }))
    .await;

    assert_eq!(resp.model, "gpt-4");
    match resp.result {
        ResponsePayload::ToolInvocation { name, arguments } => {
            assert_eq!(name, "use_calculator");
            let parsed: Value = serde_json::from_str(&arguments).unwrap();
            assert_eq!(parsed, json!({"expression": "2+2"}));
        }
        other => panic!("expected tool invocation, got {other:?}"),
    }
}

#[tokio::test]
async fn second_pass_echoes_tool_result() {
    let resp = post_chat(json!({
        "model": "gpt-4",
        "messages": [
            {"role": "user", "content": "What is 2+2?"},
            {"role": "assistant", "tool_name": "use_calculator",
             "tool_arguments": "{\"expression\":\"2+2\"}"},
            {"role": "tool", "tool_name": "use_calculator", "content": "{\"result\":4}"}
        ],
        "tools": [{"name": "use_calculator"}]
    }))
    .await;

    assert_eq!(
        resp.result,
        ResponsePayload::DirectAnswer {
            text: "{\"result\":4}".to_string()
        }
    );
}
