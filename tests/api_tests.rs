use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use gemini_summarizer::ai::TextGenerator;
use gemini_summarizer::api::{AppState, router};
use gemini_summarizer::core::config::MockSwitch;
use gemini_summarizer::errors::SummarizeError;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Generator that records prompts and replies with a canned result.
struct FakeGenerator {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn model_name(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(SummarizeError::GeminiError)
    }
}

fn app(generator: Arc<FakeGenerator>, mock: bool) -> Router {
    router(AppState::new(generator, MockSwitch::Fixed(mock)), 64 * 1024)
}

async fn send(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let response = app.oneshot(builder.body(body.into()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_json_body_is_summarized_by_model() {
    let generator = FakeGenerator::replying("  A tidy summary.\n");
    let (status, body) = send(
        app(generator.clone(), false),
        "/summarize?style=executive&max_words=60",
        Some("application/json"),
        r#"{"text": "Read https://example.com/post   for\\ndetails."}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "summary": "A tidy summary.",
            "meta": {"model": "fake-model", "max_words": 60, "style": "executive", "mock": false}
        })
    );

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Max 60 words. Style: executive."));
    assert!(prompts[0].ends_with("TEXT:\nRead [URL] for details."));
}

#[tokio::test]
async fn test_plain_text_body_uses_defaults() {
    let generator = FakeGenerator::replying("ok");
    let (status, body) = send(
        app(generator.clone(), false),
        "/summarize",
        Some("text/plain; charset=utf-8"),
        "Plain text body",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["style"], "concise");
    assert_eq!(body["meta"]["max_words"], 120);
    assert!(generator.prompts()[0].contains("Max 120 words. Style: concise."));
}

#[tokio::test]
async fn test_empty_max_words_requests_brief_summary() {
    let generator = FakeGenerator::replying("ok");
    let (status, body) = send(
        app(generator.clone(), false),
        "/summarize?max_words=&style=bullet%20points",
        Some("text/plain"),
        "Some text",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["max_words"], Value::Null);
    assert_eq!(body["meta"]["style"], "bullet points");
    assert!(
        generator.prompts()[0]
            .contains("Keep it brief. Return bullet points, each line starting with '- '.")
    );
}

#[tokio::test]
async fn test_mock_mode_skips_model() {
    let generator = FakeGenerator::failing("must not be called");
    let text = (1..=130).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let (status, body) = send(
        app(generator.clone(), true),
        "/summarize?style=tl;dr&max_words=50",
        Some("application/json"),
        json!({ "text": text }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["mock"], true);
    assert_eq!(body["meta"]["style"], "tl;dr");
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.ends_with("..."));
    assert_eq!(summary.trim_end_matches("...").split(' ').count(), 50);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_json_without_text_is_422() {
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize",
        Some("application/json"),
        "{}",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"detail": "JSON body must include 'text'."}));
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize",
        Some("application/json"),
        "{\"text\": ",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "JSON body must include 'text'.");
}

#[tokio::test]
async fn test_unsupported_content_type_is_415() {
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize",
        Some("application/xml"),
        "<text>hello</text>",
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["detail"].as_str().unwrap().contains("Unsupported Content-Type"));

    let (status, _) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize",
        None,
        "hello",
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_blank_text_is_422() {
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize",
        Some("application/json"),
        r#"{"text": "   "}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"detail": "Text cannot be empty."}));
}

#[tokio::test]
async fn test_invalid_query_is_422_before_body_checks() {
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize?max_words=401",
        Some("application/xml"),
        "<x/>",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("max_words"));

    let (status, body) = send(
        app(FakeGenerator::replying("ok"), false),
        "/summarize?style=poem",
        Some("text/plain"),
        "hello",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("style"));
}

#[tokio::test]
async fn test_blank_model_output_is_500() {
    let (status, body) = send(
        app(FakeGenerator::replying(" \n "), false),
        "/summarize",
        Some("text/plain"),
        "Some text",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Empty summary from model."}));
}

#[tokio::test]
async fn test_model_failure_is_500_with_message() {
    let (status, body) = send(
        app(FakeGenerator::failing("quota exhausted"), false),
        "/summarize",
        Some("text/plain"),
        "Some text",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"detail": "Failed to access Gemini API: quota exhausted"})
    );
}

#[tokio::test]
async fn test_text_that_cleans_to_nothing_is_500_in_mock_mode() {
    // Passes the blank check but is removed entirely by normalization.
    let (status, body) = send(
        app(FakeGenerator::replying("ok"), true),
        "/summarize",
        Some("text/plain"),
        "\u{0001}\u{0002}",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Empty summary from model.");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let generator = FakeGenerator::replying("ok");
    let app = router(AppState::new(generator, MockSwitch::Fixed(true)), 16);
    let (status, body) = send(app, "/summarize", Some("text/plain"), "x".repeat(64)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["detail"].is_string(), "expected JSON detail, got {body}");
}

#[tokio::test]
async fn test_non_ascii_content_type_dispatches_on_prefix() {
    let generator = FakeGenerator::replying("ok");
    let request = Request::builder()
        .method("POST")
        .uri("/summarize")
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_bytes(b"text/plain; name=caf\xe9").unwrap(),
        )
        .body(Body::from("hello world"))
        .unwrap();

    let response = app(generator.clone(), false).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(generator.prompts().len(), 1);
    assert!(generator.prompts()[0].ends_with("TEXT:\nhello world"));
}

#[tokio::test]
async fn test_healthz() {
    let response = app(FakeGenerator::replying("ok"), false)
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"ok": true, "service": "gemini-summarizer"}));
}
