use crate::config::GeminiConfig;
use crate::drivers::GeminiDriver;
use crate::transport::{Backend, BackendFailure, TransportError};
use crate::types::{GenerateContentParams, RawResponse};
use crate::Result;
use async_trait::async_trait;
use reqwest::Proxy;
use tracing::{debug, warn};
use url::Url;

/// reqwest-backed [`Backend`] speaking the Gemini REST API.
///
/// The credential travels in the `x-goog-api-key` header. Timeout and proxy
/// are transport settings taken from [`GeminiConfig`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    driver: GeminiDriver,
}

impl HttpBackend {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(TransportError::InvalidUrl)?;

        let mut builder = reqwest::Client::builder().timeout(config.timeout);

        if let Some(proxy_url) = &config.proxy_url {
            match Proxy::all(proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => warn!(proxy = %proxy_url, error = %e, "ignoring invalid proxy url"),
            }
        }

        let client = builder.build().map_err(TransportError::Http)?;

        Ok(Self {
            client,
            base_url,
            driver: GeminiDriver::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> std::result::Result<Url, BackendFailure> {
        let url = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.driver.endpoint_path(model)
        );
        Url::parse(&url).map_err(|e| BackendFailure::new(format!("invalid endpoint {}: {}", url, e)))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate_content(
        &self,
        api_key: &str,
        params: &GenerateContentParams,
    ) -> std::result::Result<RawResponse, BackendFailure> {
        let url = self.endpoint(&params.model)?;
        let body = self.driver.build_body(params);

        debug!(model = %params.model, json = params.wants_json(), "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let json: Option<serde_json::Value> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            warn!(status = status.as_u16(), "generateContent request failed");
            let message = json.as_ref().and_then(|v| self.driver.parse_error(v));
            return Err(BackendFailure {
                message,
                status: Some(status.as_u16()),
            });
        }

        let json = json.ok_or_else(|| {
            BackendFailure::new("response body was not valid JSON").with_status(status.as_u16())
        })?;

        let raw = self.driver.parse_response(&json);
        debug!(
            text_len = raw.text().len(),
            candidates = raw.candidates.as_ref().map(|c| c.len()).unwrap_or(0),
            "received generateContent response"
        );
        Ok(raw)
    }
}
