//! JSON document encoder backed by serde_json.

use crpt_core::domain::Document;
use crpt_core::ports::{DocumentEncoder, EncodeError};

/// Encodes documents as compact JSON with calendar dates (`yyyy-MM-dd`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentEncoder;

impl JsonDocumentEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentEncoder for JsonDocumentEncoder {
    fn encode(&self, document: &Document) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(document).map_err(|e| EncodeError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crpt_core::domain::{Description, Product};

    fn sample_document() -> Document {
        Document {
            description: Some(Description {
                participant_inn: "7700000000".to_string(),
            }),
            doc_id: "doc-42".to_string(),
            doc_status: "NEW".to_string(),
            doc_type: "LP_INTRODUCE_GOODS".to_string(),
            import_request: true,
            owner_inn: "7700000000".to_string(),
            participant_inn: "7700000000".to_string(),
            producer_inn: "7700000001".to_string(),
            production_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            production_type: "OWN_PRODUCTION".to_string(),
            products: vec![Product {
                certificate_document: None,
                certificate_document_date: Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
                certificate_document_number: None,
                owner_inn: "7700000000".to_string(),
                producer_inn: "7700000001".to_string(),
                production_date: None,
                tnved_code: "6401100000".to_string(),
                uit_code: Some("010460043993125621JgXJ5.T".to_string()),
                uitu_code: None,
            }],
            reg_date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            reg_number: None,
        }
    }

    #[test]
    fn test_dates_are_calendar_dates() {
        let bytes = JsonDocumentEncoder::new().encode(&sample_document()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["production_date"], "2024-01-05");
        assert_eq!(json["reg_date"], "2024-01-06");
        assert_eq!(json["products"][0]["certificate_document_date"], "2023-12-31");
    }

    #[test]
    fn test_registry_field_names() {
        let bytes = JsonDocumentEncoder::new().encode(&sample_document()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["importRequest"], true);
        assert_eq!(json["description"]["participantInn"], "7700000000");
        assert!(json.get("reg_number").is_none());
        assert!(json["products"][0].get("uitu_code").is_none());
    }
}
