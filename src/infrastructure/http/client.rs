//! reqwest implementation of the auth transport

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::models::config::ApiConfig;
use crate::domain::ports::{AuthTransport, TransportError};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL endpoint paths are appended to
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for HttpClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            timeout_secs: api.timeout_secs,
        }
    }
}

/// reqwest-backed [`AuthTransport`]
///
/// One request per call. Non-2xx responses and timeouts are reported as
/// [`TransportError`]; nothing is retried.
pub struct HttpAuthTransport {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    base_url: String,
}

impl HttpAuthTransport {
    /// Create a transport with custom configuration
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthTransport for HttpAuthTransport {
    #[instrument(skip(self, body))]
    async fn post_json(&self, path: &str, body: &Value) -> Result<Option<Value>, TransportError> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            warn!(%status, "authentication backend returned error status");
            return Err(TransportError::from_status(status, body));
        }

        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "authentication backend responded");
        Ok(parse_body(&text))
    }
}

/// Decode a response body; non-JSON text is kept as a JSON string
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
