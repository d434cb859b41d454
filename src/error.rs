use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "request.prompt", "env.API_KEY")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected shape, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "dispatcher", "event_planner")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the generation core.
///
/// `MalformedPayload` is the only recoverable variant: the caller is expected
/// to fall back to rendering the raw text. Everything else is surfaced to the
/// user as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Gemini API error: {message}")]
    Backend { message: String },

    #[error("Unknown error: {message}{}", format_context(.context))]
    Unknown {
        message: String,
        context: ErrorContext,
    },

    #[error("Malformed payload: {reason}. Raw text: {raw}")]
    MalformedPayload { reason: String, raw: String },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new unknown error with structured context
    pub fn unknown_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Unknown {
            message: msg.into(),
            context,
        }
    }

    /// Build a malformed-payload error carrying the extracted text for diagnostics.
    pub fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Error::MalformedPayload {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Unknown { context, .. } => Some(context),
            _ => None,
        }
    }

    /// True when the caller should fall back to plain-text rendering.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedPayload { .. })
    }

    /// The raw extracted text of a malformed payload.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Error::MalformedPayload { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Text suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Configuration { message, .. } => message.clone(),
            Error::Backend { message } => format!("Gemini API error: {}", message),
            Error::Unknown { .. } => "An unknown error occurred with the Gemini API.".to_string(),
            Error::MalformedPayload { raw, .. } => format!(
                "Failed to parse JSON response from AI. The response was not valid JSON. Raw text: {}",
                raw
            ),
            Error::Validation { message, .. } => message.clone(),
            Error::Transport(e) => format!("Gemini API error: {}", e),
            Error::Serialization(e) => format!("Gemini API error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_formatting() {
        let err = Error::configuration_with_context(
            "credential missing",
            ErrorContext::new()
                .with_field_path("env.API_KEY")
                .with_source("dispatcher"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: credential missing (field: env.API_KEY, source: dispatcher)"
        );
        assert_eq!(
            err.context().and_then(|c| c.source.as_deref()),
            Some("dispatcher")
        );
    }

    #[test]
    fn test_only_malformed_is_recoverable() {
        let malformed = Error::malformed("expected value at line 1 column 1", "not json");
        assert!(malformed.is_recoverable());
        assert_eq!(malformed.raw_text(), Some("not json"));

        let backend = Error::Backend {
            message: "quota exceeded".into(),
        };
        assert!(!backend.is_recoverable());
        assert!(backend.raw_text().is_none());
    }

    #[test]
    fn test_user_messages() {
        let unknown = Error::unknown_with_context("no message", ErrorContext::new());
        assert_eq!(
            unknown.user_message(),
            "An unknown error occurred with the Gemini API."
        );

        let backend = Error::Backend {
            message: "API key not valid".into(),
        };
        assert_eq!(backend.user_message(), "Gemini API error: API key not valid");

        let validation = Error::validation_with_context(
            "Please provide an event description.",
            ErrorContext::new().with_field_path("event_description"),
        );
        assert_eq!(
            validation.user_message(),
            "Please provide an event description."
        );
    }
}
