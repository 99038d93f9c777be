//! Voice catalog and balance lookups

use crate::mock_server::*;
use serde_json::json;
use tts_lib_rust::{Error, OptionalFieldPolicy, Voice, VoiceFilter};

#[tokio::test]
async fn test_list_voices_unwraps_envelope() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/voices/list", 200, r#"{"voices":[{"id":"a"},{"id":"b"}]}"#)
        .await;

    let voices = fixture.client().list_voices(None).await.unwrap();

    let expected: Vec<Voice> = serde_json::from_value(json!([{"id": "a"}, {"id": "b"}])).unwrap();
    assert_eq!(voices, expected);
    assert_eq!(voices[1].id(), Some("b"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_voices_filter_is_not_sent() {
    let (base_url, server) = serve_once(json_response(r#"{"voices":[{"id":"a"},{"id":"b"}]}"#)).await;
    let client = client_for(&base_url, OptionalFieldPolicy::Presence);

    let filter = VoiceFilter::default().language("en-US").model("tts-1");
    let voices = client.list_voices(Some(&filter)).await.unwrap();
    assert_eq!(voices.len(), 2);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /voices/list HTTP/1.1\r\n"), "{}", request);
}

#[tokio::test]
async fn test_list_voices_bad_envelope_is_format_error() {
    for body in [r#"{"data":[]}"#, r#"{"voices":"none"}"#, "not json"] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_json("GET", "/voices/list", 200, body).await;
        let err = fixture.client().list_voices(None).await.unwrap_err();
        assert!(matches!(err, Error::Format { .. }), "{}: {:?}", body, err);
    }
}

#[tokio::test]
async fn test_balance_returned_unchanged() {
    let mut fixture = MockServerFixture::new().await;
    let payload = json!({
        "total_credits": 100000,
        "used_credits": 250,
        "remaining_credits": 99750,
        "overage_characters": 0,
        "overage_amount_usd": 0
    });
    let _mock = fixture
        .mock_json("GET", "/balance", 200, &json!({"balance": payload}).to_string())
        .await;

    let balance = fixture.client().balance().await.unwrap();

    assert_eq!(balance.total_credits, 100000.0);
    assert_eq!(balance.used_credits, 250.0);
    assert_eq!(balance.remaining_credits, 99750.0);
    assert_eq!(balance.overage_characters, 0.0);
    assert_eq!(balance.overage_amount_usd, 0.0);
    assert!(balance.extra.is_empty());
}

#[tokio::test]
async fn test_balance_with_float_counts() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"balance":{"total_credits":100000.0,"used_credits":250.0,"remaining_credits":99750.0,"overage_characters":0,"overage_amount_usd":1.25}}"#;
    let _mock = fixture.mock_json("GET", "/balance", 200, body).await;

    let balance = fixture.client().balance().await.unwrap();

    assert_eq!(balance.total_credits, 100000.0);
    assert_eq!(balance.remaining_credits, 99750.0);
    assert_eq!(balance.overage_amount_usd, 1.25);
}

#[tokio::test]
async fn test_balance_errors() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/balance", 500, r#"{"error":"internal"}"#)
        .await;
    let err = fixture.client().balance().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/balance", 200, r#"{"balance":[1,2]}"#)
        .await;
    let err = fixture.client().balance().await.unwrap_err();
    assert!(matches!(err, Error::Format { .. }), "{:?}", err);

    let client = client_for(&dead_base_url().await, OptionalFieldPolicy::Presence);
    let err = client.balance().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{:?}", err);
}
