use crate::domain::Document;

/// Document encoder - turns a document into transport-ready bytes.
pub trait DocumentEncoder: Send + Sync {
    fn encode(&self, document: &Document) -> Result<Vec<u8>, EncodeError>;
}

/// Encoding errors.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
