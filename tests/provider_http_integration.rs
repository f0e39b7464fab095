//! Integration tests for the LLM provider adapters.
//!
//! A local axum server stands in for the OpenAI-compatible and Gemini APIs.
//! The tests check the request each adapter puts on the wire, how replies
//! are read, and that failures push the content backend onto its fallback.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use content_wizard::adapters::ai::{GeminiConfig, GeminiProvider, OpenAIConfig, OpenAIProvider};
use content_wizard::adapters::LlmContentBackend;
use content_wizard::domain::content::{ContentDraft, ContentOperation, KeywordSet, Origin};
use content_wizard::ports::{AIError, AIProvider, CompletionRequest, ContentBackend, MessageRole};

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Debug, Clone)]
struct Captured {
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Value,
}

type Log = Arc<Mutex<Vec<Captured>>>;

/// Answers OpenAI and Gemini shaped requests. Paths under `/fail` return 500,
/// paths under `/denied` return 401.
async fn fake_provider(State(log): State<Log>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().to_string();
    log.lock().unwrap().push(Captured {
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if path.starts_with("/fail") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    if path.starts_with("/denied") {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }

    if path.ends_with("/chat/completions") {
        Json(json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": {"role": "assistant", "content": "# Hello from OpenAI"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 5, "completion_tokens": 7}
        }))
        .into_response()
    } else if path.ends_with(":generateContent") {
        Json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "# Hello from Gemini"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4}
        }))
        .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn_fake() -> (SocketAddr, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(fake_provider).with_state(log.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, log)
}

fn request() -> CompletionRequest {
    CompletionRequest::for_operation(ContentOperation::Generate)
        .with_system_prompt("You are a blog writer")
        .with_message(MessageRole::User, "Write about remote work")
        .with_max_tokens(1000)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn openai_sends_bearer_token_and_reads_first_choice() {
    let (addr, log) = spawn_fake().await;
    let provider =
        OpenAIProvider::new(OpenAIConfig::new("sk-test").with_base_url(format!("http://{addr}/v1")))
            .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "# Hello from OpenAI");
    assert_eq!(response.usage.total_tokens, 12);

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/v1/chat/completions");
    assert_eq!(calls[0].headers["authorization"], "Bearer sk-test");
    assert_eq!(calls[0].body["model"], "gpt-4o-mini");
    assert_eq!(calls[0].body["messages"][0]["role"], "system");
    assert_eq!(calls[0].body["messages"][1]["content"], "Write about remote work");
    assert_eq!(calls[0].body["max_tokens"], 1000);
}

#[tokio::test]
async fn deepseek_uses_openai_wire_format() {
    let (addr, log) = spawn_fake().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::deepseek("ds-test").with_base_url(format!("http://{addr}/deepseek/v1")),
    )
    .unwrap();

    provider.complete(request()).await.unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls[0].path, "/deepseek/v1/chat/completions");
    assert_eq!(calls[0].body["model"], "deepseek-chat");
    assert_eq!(calls[0].headers["authorization"], "Bearer ds-test");
}

#[tokio::test]
async fn gemini_sends_key_header_not_query() {
    let (addr, log) = spawn_fake().await;
    let provider = GeminiProvider::new(
        GeminiConfig::new("AIza-test").with_base_url(format!("http://{addr}/v1beta")),
    )
    .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "# Hello from Gemini");

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls[0].path, "/v1beta/models/gemini-1.5-pro:generateContent");
    assert_eq!(calls[0].headers["x-goog-api-key"], "AIza-test");
    assert!(calls[0].query.is_none());
    assert_eq!(calls[0].body["contents"][0]["parts"][0]["text"], "Write about remote work");
    assert_eq!(
        calls[0].body["systemInstruction"]["parts"][0]["text"],
        "You are a blog writer"
    );
    assert_eq!(calls[0].body["generationConfig"]["maxOutputTokens"], 1000);
}

#[tokio::test]
async fn status_codes_map_to_provider_errors() {
    let (addr, _log) = spawn_fake().await;

    let failing =
        OpenAIProvider::new(OpenAIConfig::new("k").with_base_url(format!("http://{addr}/fail")))
            .unwrap();
    assert!(matches!(
        failing.complete(request()).await,
        Err(AIError::Unavailable { .. })
    ));

    let denied =
        GeminiProvider::new(GeminiConfig::new("k").with_base_url(format!("http://{addr}/denied")))
            .unwrap();
    assert!(matches!(
        denied.complete(request()).await,
        Err(AIError::AuthenticationFailed)
    ));
}

#[tokio::test]
async fn backend_falls_back_once_on_server_error() {
    let (addr, log) = spawn_fake().await;
    let provider =
        OpenAIProvider::new(OpenAIConfig::new("k").with_base_url(format!("http://{addr}/fail")))
            .unwrap();
    let backend = LlmContentBackend::new(Arc::new(provider));
    let keywords = KeywordSet::from(vec!["remote work".to_string()]);

    let draft = backend.generate("Remote Work", "inform", &keywords).await;
    assert_eq!(draft.origin, Origin::Fallback);
    assert!(draft.value.as_str().starts_with("# Remote Work"));

    let rewritten = backend
        .rephrase(&ContentDraft::new("Some text"), &keywords)
        .await;
    assert_eq!(rewritten.origin, Origin::Fallback);

    // One request per operation, no retries
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn backend_reports_live_origin_on_success() {
    let (addr, _log) = spawn_fake().await;
    let provider = GeminiProvider::new(
        GeminiConfig::new("AIza").with_base_url(format!("http://{addr}/v1beta")),
    )
    .unwrap();
    let backend = LlmContentBackend::new(Arc::new(provider));

    let draft = backend
        .generate("Remote Work", "inform", &KeywordSet::from(vec!["seo".to_string()]))
        .await;

    assert_eq!(draft.origin, Origin::Live);
    assert_eq!(draft.value.as_str(), "# Hello from Gemini");
}
