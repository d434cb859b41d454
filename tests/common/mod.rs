//! Shared fixtures: an in-process fake backend and a mockito-backed server.

#![allow(dead_code)]

use async_trait::async_trait;
use localhive::{
    Backend, BackendFailure, Dispatcher, DispatcherBuilder, GenerateContentParams, RawResponse,
};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::{Arc, Mutex};

pub const TEST_MODEL: &str = "gemini-test";
pub const TEST_KEY: &str = "test-key";

/// Fake backend that records every payload and replays a canned reply.
#[derive(Debug)]
pub struct FakeBackend {
    reply: std::result::Result<RawResponse, BackendFailure>,
    calls: Mutex<Vec<(String, GenerateContentParams)>>,
}

impl FakeBackend {
    pub fn replying(reply: RawResponse) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(failure: BackendFailure) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(failure),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, GenerateContentParams)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn generate_content(
        &self,
        api_key: &str,
        params: &GenerateContentParams,
    ) -> std::result::Result<RawResponse, BackendFailure> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), params.clone()));
        self.reply.clone()
    }
}

/// Dispatcher with a credential over `backend`.
pub fn dispatcher_with(backend: Arc<FakeBackend>) -> Dispatcher {
    DispatcherBuilder::new()
        .api_key(TEST_KEY)
        .model(TEST_MODEL)
        .backend(backend)
        .build()
        .expect("dispatcher builds")
}

/// Test fixture that manages a mock Gemini server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn endpoint() -> String {
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    }

    /// Dispatcher over HTTP pointed at the mock server.
    pub fn dispatcher(&self) -> Dispatcher {
        DispatcherBuilder::new()
            .api_key(TEST_KEY)
            .model(TEST_MODEL)
            .base_url(&self.base_url)
            .build()
            .expect("dispatcher builds")
    }

    /// Mock a successful generateContent reply, optionally matching part of the request body.
    pub async fn mock_success(&mut self, body: &serde_json::Value, expect_request: Option<serde_json::Value>) -> Mock {
        let mut mock = self
            .server
            .mock("POST", Self::endpoint().as_str())
            .match_header("x-goog-api-key", TEST_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string());
        if let Some(partial) = expect_request {
            mock = mock.match_body(Matcher::PartialJson(partial));
        }
        mock.create_async().await
    }

    /// Mock an error response
    pub async fn mock_error(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", Self::endpoint().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Gemini REST reply with one candidate holding `text`.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}
