//! Gemini generateContent REST driver.
//!
//! Translates [`GenerateContentParams`] into the REST request body and the
//! REST reply back into [`RawResponse`]. Key differences from the SDK shape:
//! - `contents` is a list of `{role, parts}` turns, not a bare string.
//! - `systemInstruction` is a content object with `parts`.
//! - `responseMimeType` lives under `generationConfig`.
//! - Reply text sits at `candidates[0].content.parts[*].text`.

use serde_json::Value;

use crate::types::{Candidate, GenerateContentParams, RawResponse, Tool};

#[derive(Debug, Clone, Default)]
pub struct GeminiDriver;

impl GeminiDriver {
    pub fn new() -> Self {
        Self
    }

    /// Path of the non-streaming endpoint for `model`.
    pub fn endpoint_path(&self, model: &str) -> String {
        format!("/v1beta/models/{}:generateContent", model)
    }

    pub fn build_body(&self, params: &GenerateContentParams) -> Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": params.contents }],
            }],
        });

        let Some(config) = params.config.as_ref() else {
            return body;
        };

        if let Some(sys) = &config.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": sys }]
            });
        }

        if let Some(tools) = &config.tools {
            let tools: Vec<Value> = tools
                .iter()
                .map(|t| match t {
                    Tool::GoogleSearch(_) => serde_json::json!({ "googleSearch": {} }),
                })
                .collect();
            body["tools"] = Value::Array(tools);
        }

        if let Some(mime) = &config.response_mime_type {
            body["generationConfig"] = serde_json::json!({ "responseMimeType": mime });
        }

        body
    }

    pub fn parse_response(&self, body: &Value) -> RawResponse {
        // Same as the SDK's `text` accessor: all text parts of the first candidate.
        let text = body
            .pointer("/candidates/0/content/parts")
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());

        let candidates = body
            .get("candidates")
            .and_then(|c| c.as_array())
            .map(|cands| {
                cands
                    .iter()
                    .map(|c| serde_json::from_value::<Candidate>(c.clone()).unwrap_or_default())
                    .collect()
            });

        RawResponse { text, candidates }
    }

    /// `error.message` of a failed call, if the backend supplied one.
    pub fn parse_error(&self, body: &Value) -> Option<String> {
        body.pointer("/error/message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(String::from)
    }
}
