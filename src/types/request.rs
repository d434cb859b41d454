//! Outbound request types: what a tool asks for, and what goes over the wire.

use serde::{Deserialize, Serialize};

use crate::{Error, ErrorContext, Result};

/// MIME type that switches the backend into structured (JSON) output mode.
pub const JSON_MIME_TYPE: &str = "application/json";

/// One user action's worth of generation input.
///
/// Built fresh per button press / form submit and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    #[serde(default)]
    pub enable_web_search: bool,
    #[serde(default)]
    pub expect_structured: bool,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            enable_web_search: false,
            expect_structured: false,
        }
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn web_search(mut self, enable: bool) -> Self {
        self.enable_web_search = enable;
        self
    }

    pub fn structured(mut self, expect: bool) -> Self {
        self.expect_structured = expect;
        self
    }

    /// Structured output as it will actually be requested.
    ///
    /// Search mode and structured-output mode cannot coexist in the backend,
    /// so search wins and the structured flag is dropped.
    pub fn effective_structured(&self) -> bool {
        self.expect_structured && !self.enable_web_search
    }

    /// Reject a blank prompt before anything is sent.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(Error::validation_with_context(
                "Prompt must not be empty",
                ErrorContext::new()
                    .with_field_path("request.prompt")
                    .with_source("generation_request"),
            ));
        }
        Ok(())
    }
}

/// Backend tool directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    GoogleSearch(GoogleSearch),
}

impl Tool {
    pub fn google_search() -> Self {
        Tool::GoogleSearch(GoogleSearch::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Optional configuration block of [`GenerateContentParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

impl GenerateContentConfig {
    pub fn is_empty(&self) -> bool {
        self.system_instruction.is_none()
            && self.tools.is_none()
            && self.response_mime_type.is_none()
    }

    pub fn has_search_tool(&self) -> bool {
        self.tools
            .as_ref()
            .map(|tools| tools.iter().any(|t| matches!(t, Tool::GoogleSearch(_))))
            .unwrap_or(false)
    }
}

/// Outbound payload: `{model, contents, config?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentParams {
    pub model: String,
    pub contents: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerateContentConfig>,
}

impl GenerateContentParams {
    /// Compose the payload for `request` against `model`.
    pub fn from_request(model: &str, request: &GenerationRequest) -> Self {
        let mut config = GenerateContentConfig::default();

        if let Some(sys) = request
            .system_instruction
            .as_ref()
            .filter(|s| !s.is_empty())
        {
            config.system_instruction = Some(sys.clone());
        }

        if request.enable_web_search {
            config.tools = Some(vec![Tool::google_search()]);
            config.response_mime_type = None;
        } else if request.expect_structured {
            config.response_mime_type = Some(JSON_MIME_TYPE.to_string());
        }

        Self {
            model: model.to_string(),
            contents: request.prompt.clone(),
            config: if config.is_empty() { None } else { Some(config) },
        }
    }

    pub fn wants_json(&self) -> bool {
        self.config
            .as_ref()
            .and_then(|c| c.response_mime_type.as_deref())
            == Some(JSON_MIME_TYPE)
    }
}
