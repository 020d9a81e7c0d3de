//! Query analysis models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base confidence for any analyzed query.
const BASE_CONFIDENCE: f64 = 0.5;
/// Bonus when a medicine was detected.
const MEDICINE_BONUS: f64 = 0.3;
/// Bonus when at least one symptom was detected.
const SYMPTOM_BONUS: f64 = 0.2;
/// Bonus when the query type is more specific than `general`.
const QUERY_TYPE_BONUS: f64 = 0.1;

/// Sub-category of a medicine question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    SideEffects,
    Dosage,
    Uses,
    Warnings,
    Interactions,
    General,
}

impl QueryType {
    /// Classification order. Earlier entries win when several keyword groups hit.
    pub const PRIORITY: [QueryType; 5] = [
        QueryType::SideEffects,
        QueryType::Dosage,
        QueryType::Uses,
        QueryType::Warnings,
        QueryType::Interactions,
    ];

    /// Trigger phrases for this query type.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            QueryType::SideEffects => &["side effect", "adverse", "reaction"],
            QueryType::Dosage => &["dosage", "dose", "how much", "how many"],
            QueryType::Uses => &["use", "for", "treat", "help"],
            QueryType::Warnings => &["warning", "caution", "safe", "danger"],
            QueryType::Interactions => &["interaction", "together", "with"],
            QueryType::General => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::SideEffects => "side_effects",
            QueryType::Dosage => "dosage",
            QueryType::Uses => "uses",
            QueryType::Warnings => "warnings",
            QueryType::Interactions => "interactions",
            QueryType::General => "general",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse purpose of a query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MedicineInfo,
    SymptomTreatment,
    GeneralMedical,
}

impl Intent {
    /// Derive the intent from what was extracted. A medicine always wins over symptoms.
    pub fn derive(has_medicine: bool, has_symptoms: bool) -> Self {
        if has_medicine {
            Intent::MedicineInfo
        } else if has_symptoms {
            Intent::SymptomTreatment
        } else {
            Intent::GeneralMedical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::MedicineInfo => "medicine_info",
            Intent::SymptomTreatment => "symptom_treatment",
            Intent::GeneralMedical => "general_medical",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured analysis of one query.
///
/// Intent and confidence are derived from the extracted fields at
/// construction and cannot be set independently.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryAnalysis {
    original_text: String,
    normalized_text: String,
    medicine: Option<String>,
    symptoms: Vec<String>,
    query_type: QueryType,
    intent: Intent,
    confidence: f64,
    safety_flags: Vec<String>,
}

impl QueryAnalysis {
    pub fn new(
        original_text: String,
        normalized_text: String,
        medicine: Option<String>,
        symptoms: Vec<String>,
        query_type: QueryType,
        safety_flags: Vec<String>,
    ) -> Self {
        let intent = Intent::derive(medicine.is_some(), !symptoms.is_empty());
        let confidence = score_confidence(medicine.is_some(), !symptoms.is_empty(), query_type);

        Self {
            original_text,
            normalized_text,
            medicine,
            symptoms,
            query_type,
            intent,
            confidence,
            safety_flags,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Canonical id of the detected medicine.
    pub fn medicine(&self) -> Option<&str> {
        self.medicine.as_deref()
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Emergency phrases found in the normalized text.
    pub fn safety_flags(&self) -> &[String] {
        &self.safety_flags
    }

    pub fn is_emergency(&self) -> bool {
        !self.safety_flags.is_empty()
    }
}

/// Additive confidence heuristic, capped at 1.0.
pub fn score_confidence(has_medicine: bool, has_symptoms: bool, query_type: QueryType) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if has_medicine {
        confidence += MEDICINE_BONUS;
    }
    if has_symptoms {
        confidence += SYMPTOM_BONUS;
    }
    if query_type != QueryType::General {
        confidence += QUERY_TYPE_BONUS;
    }

    confidence.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_derivation() {
        assert_eq!(Intent::derive(true, true), Intent::MedicineInfo);
        assert_eq!(Intent::derive(true, false), Intent::MedicineInfo);
        assert_eq!(Intent::derive(false, true), Intent::SymptomTreatment);
        assert_eq!(Intent::derive(false, false), Intent::GeneralMedical);
    }

    #[test]
    fn test_confidence_scoring() {
        assert!((score_confidence(false, false, QueryType::General) - 0.5).abs() < 1e-9);
        assert!((score_confidence(true, false, QueryType::General) - 0.8).abs() < 1e-9);
        assert!((score_confidence(false, true, QueryType::General) - 0.7).abs() < 1e-9);
        assert!((score_confidence(true, false, QueryType::Uses) - 0.9).abs() < 1e-9);
        assert!((score_confidence(false, true, QueryType::Dosage) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped() {
        // 0.5 + 0.3 + 0.2 + 0.1 would be 1.1
        assert_eq!(score_confidence(true, true, QueryType::Warnings), 1.0);
        assert!((score_confidence(true, true, QueryType::General) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_derives_intent_and_confidence() {
        let analysis = QueryAnalysis::new(
            "Headache and fever".into(),
            "headache and fever".into(),
            None,
            vec!["headache".into(), "fever".into()],
            QueryType::General,
            Vec::new(),
        );

        assert_eq!(analysis.intent(), Intent::SymptomTreatment);
        assert!((analysis.confidence() - 0.7).abs() < 1e-9);
        assert!(!analysis.is_emergency());
    }

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_string(&QueryType::SideEffects).unwrap();
        assert_eq!(json, "\"side_effects\"");
        let json = serde_json::to_string(&Intent::GeneralMedical).unwrap();
        assert_eq!(json, "\"general_medical\"");
        assert_eq!(QueryType::Interactions.to_string(), "interactions");
    }

    #[test]
    fn test_priority_excludes_general() {
        assert!(!QueryType::PRIORITY.contains(&QueryType::General));
        assert!(QueryType::General.keywords().is_empty());
    }
}
