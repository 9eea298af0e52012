//! Request and response shapes for the document API

use docfill_core::DocumentFields;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-document`.
///
/// Every field is optional at the serde layer so that a missing key and
/// an empty string fail validation identically, with one 400 body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub date: Option<String>,
    pub price: Option<String>,
}

impl GenerateRequest {
    /// Collapse into a validated field set, or `None` when any field is
    /// absent or empty.
    pub fn into_fields(self) -> Option<DocumentFields> {
        let fields = DocumentFields {
            full_name: self.full_name?,
            address: self.address?,
            date: self.date?,
            price: self.price?,
        };
        fields.validate().ok()?;
        Some(fields)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
    pub filename: String,
}

/// Payload for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    #[serde(rename = "generateDocument")]
    pub generate_document: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> GenerateRequest {
        GenerateRequest {
            full_name: Some("Jane Buyer".to_string()),
            address: Some("12 Ocean Ave".to_string()),
            date: Some("2026-08-25".to_string()),
            price: Some("$450,000".to_string()),
        }
    }

    #[test]
    fn complete_request_yields_fields() {
        assert!(complete().into_fields().is_some());
    }

    #[test]
    fn missing_key_and_empty_string_are_equivalent() {
        let mut absent = complete();
        absent.price = None;
        assert!(absent.into_fields().is_none());

        let mut empty = complete();
        empty.price = Some(String::new());
        assert!(empty.into_fields().is_none());
    }

    #[test]
    fn request_accepts_camel_case_keys() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"fullName": "A", "address": "B", "date": "C", "price": "D"}"#,
        )
        .unwrap();
        assert_eq!(req.full_name.as_deref(), Some("A"));
        assert!(req.into_fields().is_some());
    }
}
