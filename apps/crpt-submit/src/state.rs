//! Application state - shared across all submission tasks.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use crpt_core::SubmissionPipeline;
use crpt_core::domain::Document;
use crpt_core::ports::{DocumentEncoder, RegistryTransport};
use crpt_infra::{FixedWindowGate, HttpTransportConfig, JsonDocumentEncoder, ReqwestTransport};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Shared application state.
pub struct AppState {
    pipeline: SubmissionPipeline,
    auth_token: String,
    signature: Vec<u8>,
}

impl AppState {
    /// Build the pipeline and load the signature once for all submissions.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let policy = config.rate_limit.policy()?;

        let gate = Arc::new(FixedWindowGate::new(policy));
        let encoder: Arc<dyn DocumentEncoder> = Arc::new(JsonDocumentEncoder::new());
        let transport: Arc<dyn RegistryTransport> = Arc::new(ReqwestTransport::new(
            HttpTransportConfig {
                timeout: config.http_timeout,
            },
        )?);

        tracing::info!(
            window = ?gate.policy().window(),
            max_requests = gate.policy().max_requests(),
            "Admission gate configured"
        );

        let pipeline = SubmissionPipeline::new(gate, encoder, transport)
            .with_endpoint(config.api_url.clone());

        let signature = tokio::fs::read(&config.signature_file)
            .await
            .with_context(|| {
                format!(
                    "Failed to read signature file {}",
                    config.signature_file.display()
                )
            })?;

        tracing::info!(endpoint = %config.api_url, "Application state initialized");

        Ok(Self {
            pipeline,
            auth_token: config.auth_token.clone(),
            signature,
        })
    }

    /// Read, parse and submit one document file.
    pub async fn submit_file(&self, path: &Path) -> AppResult<String> {
        let raw = tokio::fs::read(path).await.map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document: Document =
            serde_json::from_slice(&raw).map_err(|source| AppError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let body = self
            .pipeline
            .submit(&document, &self.signature, &self.auth_token)
            .await?;

        Ok(body)
    }
}
