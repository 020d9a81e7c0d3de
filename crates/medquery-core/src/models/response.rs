//! Generated response models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which template produced a response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Emergency,
    MedicineInfo,
    SymptomTreatment,
    General,
    UnknownMedicine,
    Error,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Emergency => "emergency",
            ResponseType::MedicineInfo => "medicine_info",
            ResponseType::SymptomTreatment => "symptom_treatment",
            ResponseType::General => "general",
            ResponseType::UnknownMedicine => "unknown_medicine",
            ResponseType::Error => "error",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered answer to a medical query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalResponse {
    /// Markdown-flavoured answer text
    pub text: String,
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    /// Response-level confidence (0.0 - 1.0)
    pub confidence: f64,
    /// Where the information came from
    pub sources: Vec<String>,
    /// Warnings surfaced alongside the text
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

impl MedicalResponse {
    /// Generic apology used when the pipeline could not produce an answer.
    pub fn system_error() -> Self {
        Self {
            text: "I apologize, but I encountered an error processing your question. \
                   Please try again or consult a healthcare professional."
                .into(),
            response_type: ResponseType::Error,
            confidence: 0.0,
            sources: Vec::new(),
            warnings: vec!["System error occurred".into()],
            disclaimer: "Please consult a healthcare professional for medical advice.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_error_response() {
        let response = MedicalResponse::system_error();
        assert_eq!(response.response_type, ResponseType::Error);
        assert_eq!(response.confidence, 0.0);
        assert_eq!(response.warnings, vec!["System error occurred".to_string()]);
        assert!(response.disclaimer.contains("healthcare professional"));
    }

    #[test]
    fn test_response_type_serializes_as_type() {
        let response = MedicalResponse::system_error();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["confidence"], 0.0);
    }
}
