use crate::client::core::Dispatcher;
use crate::config::GeminiConfig;
use crate::transport::{Backend, HttpBackend};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating a [`Dispatcher`].
///
/// Without an explicit [`backend`](Self::backend) the dispatcher talks HTTP
/// via [`HttpBackend`]. Tests inject a fake instead.
pub struct DispatcherBuilder {
    config: GeminiConfig,
    backend: Option<Arc<dyn Backend>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            config: GeminiConfig::new(),
            backend: None,
        }
    }

    /// Start from [`GeminiConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            config: GeminiConfig::from_env(),
            backend: None,
        }
    }

    pub fn config(mut self, config: GeminiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Override the base URL (mock servers, proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the dispatcher. Never fails on a missing credential.
    pub fn build(self) -> Result<Dispatcher> {
        if self.config.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Model identifier must not be empty",
                ErrorContext::new()
                    .with_field_path("config.model")
                    .with_source("dispatcher_builder"),
            ));
        }

        let api_key = self
            .config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty());

        let backend: Arc<dyn Backend> = match self.backend {
            Some(backend) => backend,
            None => Arc::new(HttpBackend::new(&self.config)?),
        };

        Ok(Dispatcher {
            backend,
            api_key,
            model: self.config.model,
        })
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
