//! Application-level error type for a single document submission.

use std::path::PathBuf;

use crpt_core::SubmitError;

/// Why a document file could not be submitted.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl AppError {
    /// Whether running the same submission again later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Submit(err) => err.is_retryable(),
            AppError::Read { .. } | AppError::Parse { .. } => false,
        }
    }
}

/// Result type alias for submissions.
pub type AppResult<T> = Result<T, AppError>;
