//! Submission pipeline - one document, one admission decision, at most one
//! network call.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crpt_shared::DocumentEnvelope;

use crate::domain::Document;
use crate::error::SubmitError;
use crate::ports::{
    AdmissionGate, Decision, DocumentEncoder, EncodeError, RegistryRequest, RegistryTransport,
};

/// Production endpoint of the registry document API.
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/send";

const ACCEPT_ANY: &str = "*/*";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Submits documents to the registry under a shared admission gate.
///
/// Cheap to clone; clones share the same gate, so they share the same quota.
#[derive(Clone)]
pub struct SubmissionPipeline {
    gate: Arc<dyn AdmissionGate>,
    encoder: Arc<dyn DocumentEncoder>,
    transport: Arc<dyn RegistryTransport>,
    endpoint: String,
}

impl SubmissionPipeline {
    pub fn new(
        gate: Arc<dyn AdmissionGate>,
        encoder: Arc<dyn DocumentEncoder>,
        transport: Arc<dyn RegistryTransport>,
    ) -> Self {
        Self {
            gate,
            encoder,
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Override the registry endpoint (sandbox stands, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one document.
    ///
    /// Returns the registry's success body unchanged. Invalid input is
    /// rejected before the gate is consulted and does not consume quota;
    /// every other call consumes exactly one admission decision.
    pub async fn submit(
        &self,
        document: &Document,
        signature: &[u8],
        auth_token: &str,
    ) -> Result<String, SubmitError> {
        if signature.is_empty() {
            return Err(SubmitError::InvalidRequest(
                "Signature must not be empty".to_string(),
            ));
        }
        if auth_token.trim().is_empty() {
            return Err(SubmitError::InvalidRequest(
                "Auth token must not be empty".to_string(),
            ));
        }

        if self.gate.try_admit() == Decision::Rejected {
            tracing::debug!(doc_id = %document.doc_id, "Submission rejected by rate limiter");
            return Err(SubmitError::RateLimitExceeded);
        }

        let encoded = self.encoder.encode(document)?;
        if encoded.is_empty() {
            return Err(SubmitError::InvalidRequest(
                "Encoded document is empty".to_string(),
            ));
        }

        let envelope =
            DocumentEnvelope::introduce_goods(STANDARD.encode(&encoded), STANDARD.encode(signature));
        let body = serde_json::to_string(&envelope)
            .map_err(|e| EncodeError::Serialization(e.to_string()))?;

        let request = RegistryRequest {
            endpoint: self.endpoint.clone(),
            body,
            bearer_token: auth_token.to_string(),
            accept: ACCEPT_ANY.to_string(),
            content_type: CONTENT_TYPE_JSON.to_string(),
        };

        tracing::info!(doc_id = %document.doc_id, endpoint = %self.endpoint, "Submitting document");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(doc_id = %document.doc_id, error = %e, "Registry call failed");
            SubmitError::TransportFailure(e)
        })?;

        if response.is_success() {
            tracing::info!(doc_id = %document.doc_id, status = response.status, "Document accepted");
            Ok(response.body)
        } else {
            tracing::warn!(
                doc_id = %document.doc_id,
                status = response.status,
                body = %response.body,
                "Registry rejected document"
            );
            Err(SubmitError::RegistryRejected {
                status: response.status,
                body: response.body,
            })
        }
    }
}
