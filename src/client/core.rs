use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::normalize::{normalize_structured, normalize_text};
use crate::structured::ShapeValidator;
use crate::transport::{Backend, BackendFailure};
use crate::types::{GenerateContentParams, GenerationRequest, GenerationResult, RawResponse};
use crate::{Error, ErrorContext, Result};

/// Explicitly constructed client for the generative-text backend.
///
/// One call per [`dispatch`](Self::dispatch), no queuing, no retries, no
/// internal timeout. Callers disable re-submission while a call is in
/// flight; overlapping calls are not prevented and the last one to finish
/// wins.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    pub(crate) backend: Arc<dyn Backend>,
    pub(crate) api_key: Option<String>,
    pub(crate) model: String,
}

impl Dispatcher {
    pub fn builder() -> crate::client::DispatcherBuilder {
        crate::client::DispatcherBuilder::new()
    }

    /// Dispatcher over HTTP with configuration read from the environment.
    ///
    /// A missing credential is not an error here; it surfaces on first dispatch.
    pub fn from_env() -> Result<Self> {
        crate::client::DispatcherBuilder::from_env().build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Outbound payload for `request`, exactly as [`dispatch`](Self::dispatch) would send it.
    pub fn build_params(&self, request: &GenerationRequest) -> GenerateContentParams {
        GenerateContentParams::from_request(&self.model, request)
    }

    /// Send `request` and return the backend's reply untouched.
    pub async fn dispatch(&self, request: &GenerationRequest) -> Result<RawResponse> {
        let api_key = self.credential()?;
        request.validate()?;

        let params = self.build_params(request);
        self.backend
            .generate_content(api_key, &params)
            .await
            .map_err(Self::map_failure)
    }

    /// Dispatch and normalize to `{text, sources}`.
    pub async fn generate_text(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let raw = self.dispatch(request).await?;
        Ok(normalize_text(&raw))
    }

    /// Dispatch in structured-output mode and decode the reply into `T`.
    ///
    /// `expect_structured` is forced on; if the request also enables web
    /// search the structured directive is still dropped from the payload,
    /// but the reply is decoded all the same.
    pub async fn generate_structured<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
        validator: Option<&dyn ShapeValidator>,
    ) -> Result<T> {
        let request = request.clone().structured(true);
        let raw = self.dispatch(&request).await?;
        normalize_structured(&raw, validator)
    }

    fn credential(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::configuration_with_context(
                "Gemini API key is not configured. Please set the API_KEY environment variable.",
                ErrorContext::new()
                    .with_field_path("env.API_KEY")
                    .with_source("dispatcher"),
            )
        })
    }

    fn map_failure(failure: BackendFailure) -> Error {
        match failure.message {
            Some(message) => Error::Backend { message },
            None => {
                let mut context = ErrorContext::new().with_source("backend");
                if let Some(status) = failure.status {
                    context = context.with_details(format!("HTTP {}", status));
                }
                Error::unknown_with_context("An unknown error occurred with the Gemini API.", context)
            }
        }
    }
}
