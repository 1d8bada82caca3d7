use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goods-introduction document as understood by the registry.
///
/// Field names follow the registry schema, which mixes `snake_case` with a
/// couple of `camelCase` keys. Dates serialise as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest", default)]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub reg_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// A single marked item within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document_number: Option<String>,
    pub owner_inn: String,
    pub producer_inn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_date: Option<NaiveDate>,
    pub tnved_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uit_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uitu_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_registry_document() {
        let json = r#"{
            "description": { "participantInn": "7700000000" },
            "doc_id": "doc-1",
            "doc_status": "NEW",
            "doc_type": "LP_INTRODUCE_GOODS",
            "importRequest": true,
            "owner_inn": "7700000000",
            "participant_inn": "7700000000",
            "producer_inn": "7700000001",
            "production_date": "2024-03-01",
            "production_type": "OWN_PRODUCTION",
            "products": [{
                "certificate_document_date": "2024-02-20",
                "owner_inn": "7700000000",
                "producer_inn": "7700000001",
                "tnved_code": "6401100000",
                "uit_code": "010460043993125621JgXJ5.T"
            }],
            "reg_date": "2024-03-02"
        }"#;

        let document: Document = serde_json::from_str(json).unwrap();

        assert!(document.import_request);
        assert_eq!(
            document.description.as_ref().map(|d| d.participant_inn.as_str()),
            Some("7700000000")
        );
        assert_eq!(
            document.production_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(document.products.len(), 1);
        assert_eq!(document.products[0].certificate_document, None);
        assert_eq!(document.reg_number, None);
    }
}
