//! HttpBackend against a mockito Gemini server.

mod common;

use common::{gemini_reply, MockServerFixture};
use localhive::{Error, GenerationRequest};
use serde_json::json;

#[tokio::test]
async fn test_text_round_trip_over_http() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_success(
            &gemini_reply("Bring snacks and a first-aid kit."),
            Some(json!({
                "contents": [{"role": "user", "parts": [{"text": "Plan a picnic"}]}],
                "systemInstruction": {"parts": [{"text": "Be practical."}]}
            })),
        )
        .await;

    let result = fixture
        .dispatcher()
        .generate_text(&GenerationRequest::new("Plan a picnic").system_instruction("Be practical."))
        .await
        .unwrap();

    assert_eq!(result.text, "Bring snacks and a first-aid kit.");
    assert!(result.sources.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_structured_request_sets_generation_config() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_success(
            &gemini_reply(r#"[{"name":"Seed Swap","description":"Trade seeds"}]"#),
            Some(json!({"generationConfig": {"responseMimeType": "application/json"}})),
        )
        .await;

    let raw = fixture
        .dispatcher()
        .dispatch(&GenerationRequest::new("Ideas").structured(true))
        .await
        .unwrap();

    assert!(raw.text().contains("Seed Swap"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_request_carries_tool_and_grounding() {
    let mut fixture = MockServerFixture::new().await;
    let reply = json!({
        "candidates": [{
            "content": {"parts": [{"text": "The fair is on Sunday."}], "role": "model"},
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://fair.example", "title": "County Fair"}},
                    {"web": {"title": "untitled"}}
                ]
            }
        }]
    });
    let mock = fixture
        .mock_success(&reply, Some(json!({"tools": [{"googleSearch": {}}]})))
        .await;

    let result = fixture
        .dispatcher()
        .generate_text(&GenerationRequest::new("When is the fair?").web_search(true).structured(true))
        .await
        .unwrap();

    assert_eq!(result.text, "The fair is on Sunday.");
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].title.as_deref(), Some("County Fair"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_body_message_is_passed_through() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error(
            400,
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;

    let err = fixture
        .dispatcher()
        .dispatch(&GenerationRequest::new("Hi"))
        .await
        .unwrap_err();

    match err {
        Error::Backend { message } => {
            assert_eq!(message, "API key not valid. Please pass a valid API key.")
        }
        other => panic!("expected Backend, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_message_is_unknown() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error(503, "").await;

    let err = fixture
        .dispatcher()
        .dispatch(&GenerationRequest::new("Hi"))
        .await
        .unwrap_err();

    match err {
        Error::Unknown { context, .. } => {
            assert_eq!(context.details.as_deref(), Some("HTTP 503"));
        }
        other => panic!("expected Unknown, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_request_without_credential() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", MockServerFixture::endpoint().as_str())
        .expect(0)
        .create_async()
        .await;

    let dispatcher = localhive::DispatcherBuilder::new()
        .model(common::TEST_MODEL)
        .base_url(&fixture.base_url)
        .build()
        .unwrap();

    let err = dispatcher
        .dispatch(&GenerationRequest::new("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    mock.assert_async().await;
}
