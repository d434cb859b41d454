//! Backend seam.
//!
//! [`Backend`] is the only thing the dispatcher knows about the network. The
//! production implementation is [`HttpBackend`]; tests plug in fakes.

pub mod http;

use async_trait::async_trait;

use crate::types::{GenerateContentParams, RawResponse};

pub use http::HttpBackend;

/// A generative-text service that turns a payload into a [`RawResponse`].
///
/// Implementations issue exactly one call per invocation and never retry.
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    async fn generate_content(
        &self,
        api_key: &str,
        params: &GenerateContentParams,
    ) -> std::result::Result<RawResponse, BackendFailure>;
}

/// Failure reported by a [`Backend`].
///
/// `message` is `None` when the backend gave nothing usable to show.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("backend failure without message"))]
pub struct BackendFailure {
    pub message: Option<String>,
    pub status: Option<u16>,
}

impl BackendFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    pub fn without_message() -> Self {
        Self {
            message: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<reqwest::Error> for BackendFailure {
    fn from(e: reqwest::Error) -> Self {
        Self {
            message: Some(e.to_string()),
            status: e.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
