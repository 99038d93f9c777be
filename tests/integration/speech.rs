//! Buffered synthesis against a mock server

use crate::mock_server::*;
use serde_json::json;
use tts_lib_rust::{Error, OptionalFieldPolicy, SynthesisRequest, MAX_INPUT_CHARS};

fn request() -> SynthesisRequest {
    SynthesisRequest::new("Hello from the test suite", "tts-1", "nova")
}

#[tokio::test]
async fn test_synthesize_returns_buffered_audio() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_audio(
            "/audio/speech",
            json!({"input": "Hello from the test suite", "model": "tts-1", "voice": "nova"}),
            b"\xFF\xFBfake-mp3-frames",
        )
        .await;

    let audio = fixture.client().synthesize(&request()).await.unwrap();

    assert_eq!(audio.data, b"\xFF\xFBfake-mp3-frames");
    assert_eq!(audio.content_type.as_deref(), Some("audio/mpeg"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_optional_field_sent_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_audio(
            "/audio/speech",
            json!({
                "input": "Hello from the test suite",
                "model": "tts-1",
                "voice": "nova",
                "pitch": "+3st",
                "styleDegree": 0.0
            }),
            b"audio",
        )
        .await;

    let req = request().with_pitch("+3st").with_style_degree(0.0);
    fixture.client().synthesize(&req).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_truthy_policy_omits_zero_style_degree() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_audio(
            "/audio/speech",
            json!({
                "input": "Hello from the test suite",
                "model": "tts-1",
                "voice": "nova",
                "pitch": "+3st"
            }),
            b"audio",
        )
        .await;

    let client = client_for(&fixture.base_url, OptionalFieldPolicy::Truthy);
    let req = request().with_pitch("+3st").with_style_degree(0.0);
    client.synthesize(&req).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_requests_never_reach_the_server() {
    let mut fixture = MockServerFixture::new().await;
    let speech = fixture.mock_untouched("POST", "/audio/speech").await;
    let stream = fixture.mock_untouched("POST", "/audio/stream").await;
    let client = fixture.client();

    let invalid = [
        SynthesisRequest::new("x".repeat(MAX_INPUT_CHARS + 1), "tts-1", "nova"),
        SynthesisRequest::new("", "tts-1", "nova"),
        SynthesisRequest {
            input: "hi".into(),
            voice: "nova".into(),
            ..Default::default()
        },
        SynthesisRequest {
            input: "hi".into(),
            model: "tts-1".into(),
            ..Default::default()
        },
    ];

    for req in &invalid {
        let err = client.synthesize(req).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }), "got {:?}", err);
        let err = client.synthesize_stream(req).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }), "got {:?}", err);
    }

    speech.assert_async().await;
    stream.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"error":{"message":"Invalid API key"}}"#;
    let _mock = fixture.mock_json("POST", "/audio/speech", 401, body).await;

    let err = fixture.client().synthesize(&request()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    let msg = err.to_string();
    assert!(msg.contains("401"), "{}", msg);
    assert!(msg.contains(body), "{}", msg);
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    let response = b"HTTP/1.1 503 Service Unavailable\r\ncontent-type: application/json\r\ncontent-length: 100\r\nconnection: close\r\n\r\n{\"err".to_vec();
    let (base_url, server) = serve_once(response).await;
    let client = client_for(&base_url, OptionalFieldPolicy::Presence);

    let err = client.synthesize(&request()).await.unwrap_err();

    assert_eq!(err.status(), Some(503), "got {:?}", err);
    assert!(matches!(err, Error::Api { .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = client_for(&dead_base_url().await, OptionalFieldPolicy::Presence);
    let err = client.synthesize(&request()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_errors_are_logged_before_returning() {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/audio/speech", 401, r#"{"error":"unauthorized"}"#)
        .await;

    let _ = fixture.client().synthesize(&request()).await.unwrap_err();

    let logs = capture.contents();
    assert!(logs.contains("ERROR"), "{}", logs);
    assert!(logs.contains("synthesize"), "{}", logs);
    assert!(logs.contains("401"), "{}", logs);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/audio/speech")
        .with_status(200)
        .with_body("audio")
        .expect(2)
        .create_async()
        .await;

    let client = fixture.client();
    let first = request();
    let second = SynthesisRequest::new("Second sentence", "tts-1", "alloy");
    let (a, b) = tokio::join!(client.synthesize(&first), client.synthesize(&second));

    assert_eq!(a.unwrap().data, b"audio");
    assert_eq!(b.unwrap().data, b"audio");
    mock.assert_async().await;
}
