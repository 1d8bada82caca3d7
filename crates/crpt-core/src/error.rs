//! Domain-level error types.

use thiserror::Error;

use crate::ports::{EncodeError, TransportError};

/// Domain errors - invalid values rejected at construction time.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Submission errors - everything `SubmissionPipeline::submit` can fail with.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Failed to encode document: {0}")]
    Encoding(#[from] EncodeError),

    #[error("Registry rejected the document with status {status}: {body}")]
    RegistryRejected { status: u16, body: String },

    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TransportError),
}

impl SubmitError {
    /// Whether repeating the same call later could succeed.
    ///
    /// Registry rejections and invalid input are deterministic for a given
    /// document, so only throttling and transport failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmitError::RateLimitExceeded | SubmitError::TransportFailure(_)
        )
    }
}
