//! Registry transport over HTTP using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crpt_core::ports::{RegistryRequest, RegistryResponse, RegistryTransport, TransportError};

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Whole-request timeout, connect through body.
    pub timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// reqwest-backed registry transport. One POST per call, no retries.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        Ok(Self { client })
    }
}

fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(Box::new(err))
    } else {
        TransportError::Request(Box::new(err))
    }
}

#[async_trait]
impl RegistryTransport for ReqwestTransport {
    async fn send(&self, request: RegistryRequest) -> Result<RegistryResponse, TransportError> {
        let response = self
            .client
            .post(&request.endpoint)
            .bearer_auth(&request.bearer_token)
            .header(ACCEPT, &request.accept)
            .header(CONTENT_TYPE, &request.content_type)
            .body(request.body)
            .send()
            .await
            .map_err(map_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;

        tracing::debug!(status, bytes = body.len(), "Registry responded");

        Ok(RegistryResponse { status, body })
    }
}
