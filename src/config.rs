//! Backend configuration gathered from the process environment.
//!
//! Reading the environment never fails: a missing credential is recorded as
//! `None` and only reported when the first request is dispatched.

use std::env;
use std::time::Duration;

/// Model used for every text generation call.
pub const GEMINI_TEXT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables consulted for the credential, in order.
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Transport-level timeout. The dispatcher itself never times out.
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: GEMINI_TEXT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy_url: None,
        }
    }

    /// Load configuration with env overrides:
    /// - `API_KEY` / `GEMINI_API_KEY`
    /// - `LOCALHIVE_MODEL`
    /// - `LOCALHIVE_BASE_URL`
    /// - `LOCALHIVE_HTTP_TIMEOUT_SECS`
    /// - `LOCALHIVE_PROXY_URL`
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()));

        let model = env::var("LOCALHIVE_MODEL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| GEMINI_TEXT_MODEL.to_string());

        let base_url = env::var("LOCALHIVE_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("LOCALHIVE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            proxy_url: env::var("LOCALHIVE_PROXY_URL").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().map(|k| !k.trim().is_empty()).unwrap_or(false)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new()
    }
}
