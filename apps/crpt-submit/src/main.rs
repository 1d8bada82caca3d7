//! # CRPT Submit
//!
//! Submits goods-introduction documents to the CRPT registry.
//!
//! ```text
//! crpt-submit <document.json>...
//! ```
//!
//! All documents are submitted concurrently through one shared pipeline, so
//! the configured rate limit applies across them. Calls over the limit fail
//! immediately instead of waiting.

use std::path::PathBuf;
use std::sync::Arc;

use crpt_shared::DocumentCreated;
use tokio::task::JoinSet;

mod config;
mod error;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let documents: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if documents.is_empty() {
        anyhow::bail!("usage: crpt-submit <document.json>...");
    }

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new(&config).await?);

    let total = documents.len();
    let mut tasks = JoinSet::new();
    for path in documents {
        let state = state.clone();
        tasks.spawn(async move {
            let outcome = state.submit_file(&path).await;
            (path, outcome)
        });
    }

    let mut failed = 0;
    while let Some(joined) = tasks.join_next().await {
        let (path, outcome) = joined?;
        match outcome {
            Ok(body) => {
                let document_id = DocumentCreated::from_body(&body)
                    .map(|created| created.value)
                    .unwrap_or(body);
                tracing::info!(path = %path.display(), %document_id, "Document submitted");
            }
            Err(e) => {
                failed += 1;
                tracing::error!(
                    path = %path.display(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "Document submission failed"
                );
            }
        }
    }

    tracing::info!(total, failed, "Submission run finished");

    if failed > 0 {
        anyhow::bail!("{failed} of {total} submissions failed");
    }

    Ok(())
}
