//! Data Transfer Objects - request bodies sent to the registry.

use serde::{Deserialize, Serialize};

/// Document format accepted for manually submitted documents.
pub const DOCUMENT_FORMAT_MANUAL: &str = "MANUAL";

/// Document type for introducing goods produced in the country.
pub const DOCUMENT_TYPE_INTRODUCE_GOODS: &str = "LP_INTRODUCE_GOODS";

/// Outer submission envelope.
///
/// Both `product_document` and `signature` are already base64-encoded;
/// the envelope itself does no encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEnvelope {
    pub document_format: String,
    pub product_document: String,
    #[serde(rename = "type")]
    pub document_type: String,
    pub signature: String,
}

impl DocumentEnvelope {
    /// Envelope for a manual `LP_INTRODUCE_GOODS` submission.
    pub fn introduce_goods(product_document: String, signature: String) -> Self {
        Self {
            document_format: DOCUMENT_FORMAT_MANUAL.to_string(),
            product_document,
            document_type: DOCUMENT_TYPE_INTRODUCE_GOODS.to_string(),
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_field_names() {
        let envelope = DocumentEnvelope::introduce_goods("ZG9j".to_string(), "c2ln".to_string());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["document_format"], "MANUAL");
        assert_eq!(json["product_document"], "ZG9j");
        assert_eq!(json["type"], "LP_INTRODUCE_GOODS");
        assert_eq!(json["signature"], "c2ln");
        assert!(json.get("document_type").is_none());
    }
}
