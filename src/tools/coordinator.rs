use serde::{Deserialize, Serialize};

use super::{require, APP_NAME};
use crate::types::GenerationRequest;
use crate::Result;

/// Open-ended "help me organize X" tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    pub user_request: String,
    pub use_web_search: bool,
}

impl Coordinator {
    pub fn new(user_request: impl Into<String>) -> Self {
        Self {
            user_request: user_request.into(),
            use_web_search: false,
        }
    }

    pub fn web_search(mut self, enable: bool) -> Self {
        self.use_web_search = enable;
        self
    }

    /// The user's text is the prompt; the system instruction frames it.
    pub fn request(&self) -> Result<GenerationRequest> {
        require(
            &self.user_request,
            "Please enter your community goal or task.",
            "user_request",
            "coordinator",
        )?;

        let instruction = format!(
            "You are {}, an intelligent community assistant. A user wants to: \"{}\". Your goal is to provide a helpful plan, actionable suggestions, or break down the tasks involved. Be concise, practical, and encouraging. If the request implies needing recent information or current events, use available tools to find that information and cite sources.",
            APP_NAME, self.user_request
        );

        Ok(GenerationRequest::new(self.user_request.clone())
            .system_instruction(instruction)
            .web_search(self.use_web_search))
    }
}
