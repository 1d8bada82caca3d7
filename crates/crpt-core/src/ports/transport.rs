//! Registry transport port.

use async_trait::async_trait;

/// One outbound call to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRequest {
    pub endpoint: String,
    pub body: String,
    pub bearer_token: String,
    pub accept: String,
    pub content_type: String,
}

/// Raw registry answer, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryResponse {
    pub status: u16,
    pub body: String,
}

impl RegistryResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Registry transport - performs exactly one POST per call, no retries.
///
/// Dropping the returned future abandons the call; the admission it was
/// granted is not returned to the quota.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    async fn send(&self, request: RegistryRequest) -> Result<RegistryResponse, TransportError>;
}

/// Underlying cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures where no HTTP response was obtained.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(#[source] BoxError),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] BoxError),
}
