//! Per-tool transient UI state and the structured-or-text fallback.
//!
//! Nothing here locks: the caller disables its trigger while a tool is
//! [`Loading`](ToolState::Loading). If two calls overlap anyway, whichever
//! finishes last overwrites the state.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::Dispatcher;
use crate::normalize::{normalize_structured, normalize_text};
use crate::structured::ShapeValidator;
use crate::types::{GenerationRequest, GenerationResult, RawResponse};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolState<T> {
    Idle,
    Loading,
    Ready(T),
    /// User-facing error text.
    Failed(String),
}

impl<T> Default for ToolState<T> {
    fn default() -> Self {
        ToolState::Idle
    }
}

impl<T> ToolState<T> {
    /// Enter `Loading`, discarding any previous result or error.
    pub fn begin(&mut self) {
        *self = ToolState::Loading;
    }

    pub fn finish(&mut self, result: Result<T>) {
        *self = match result {
            Ok(value) => ToolState::Ready(value),
            Err(e) => ToolState::Failed(e.user_message()),
        };
    }

    /// Record a failure that happened before anything was dispatched.
    pub fn fail(&mut self, error: &Error) {
        *self = ToolState::Failed(error.user_message());
    }

    pub fn reset(&mut self) {
        *self = ToolState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ToolState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            ToolState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ToolState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// A structured reply, or the plain-text fallback when it would not decode.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredOrText<T> {
    Structured(T),
    Text(GenerationResult),
}

impl<T: DeserializeOwned> StructuredOrText<T> {
    /// Decode `raw` as `T`; on a malformed payload fall back to its text.
    pub fn resolve(raw: &RawResponse, validator: Option<&dyn ShapeValidator>) -> Self {
        match Self::from_result(raw, normalize_structured(raw, validator)) {
            Ok(out) => out,
            Err(_) => StructuredOrText::Text(normalize_text(raw)),
        }
    }
}

impl<T> StructuredOrText<T> {
    /// Wrap a structured decode of `raw`. `MalformedPayload` becomes the
    /// text fallback; every other error is passed through.
    pub fn from_result(raw: &RawResponse, result: Result<T>) -> Result<Self> {
        match result {
            Ok(value) => Ok(StructuredOrText::Structured(value)),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "structured decode failed, rendering as text");
                Ok(StructuredOrText::Text(normalize_text(raw)))
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, StructuredOrText::Structured(_))
    }

    pub fn structured(&self) -> Option<&T> {
        match self {
            StructuredOrText::Structured(value) => Some(value),
            StructuredOrText::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&GenerationResult> {
        match self {
            StructuredOrText::Text(result) => Some(result),
            StructuredOrText::Structured(_) => None,
        }
    }
}

/// Dispatch in structured mode and resolve with text fallback.
///
/// Configuration, backend and unknown errors still propagate.
pub async fn generate_with_fallback<T: DeserializeOwned>(
    dispatcher: &Dispatcher,
    request: &GenerationRequest,
    validator: Option<&dyn ShapeValidator>,
) -> Result<StructuredOrText<T>> {
    let request = request.clone().structured(true);
    let raw = dispatcher.dispatch(&request).await?;
    StructuredOrText::from_result(&raw, normalize_structured(&raw, validator))
}
