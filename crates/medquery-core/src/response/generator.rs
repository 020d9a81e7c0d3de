//! Response generator.
//!
//! Dispatch order (first rule wins):
//! 1. Safety flags → emergency
//! 2. Medicine detected → medicine info (or unknown medicine)
//! 3. Symptoms detected → symptom treatment
//! 4. Anything else → general overview

use crate::knowledge::KnowledgeBase;
use crate::models::{
    Intent, MedicalResponse, MedicineRecord, QueryAnalysis, QueryType, ResponseType,
};

use super::templates;

/// Response-level confidence of the general overview.
const GENERAL_CONFIDENCE: f64 = 0.8;

/// Response-level confidence when a medicine id has no record.
const UNKNOWN_MEDICINE_CONFIDENCE: f64 = 0.3;

/// Number of uses listed in the general medicine summary.
const SUMMARY_USES: usize = 3;

/// Number of medicine warnings surfaced in the response's warnings field.
const SURFACED_WARNINGS: usize = 2;

/// Renders a [`QueryAnalysis`] into a [`MedicalResponse`].
pub struct ResponseGenerator<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> ResponseGenerator<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Select and render the template for an analysis.
    pub fn generate(&self, analysis: &QueryAnalysis) -> MedicalResponse {
        if analysis.is_emergency() {
            return self.emergency_response();
        }

        match (analysis.intent(), analysis.medicine()) {
            (Intent::MedicineInfo, Some(id)) => match self.kb.medicine_by_id(id) {
                Some(record) => self.medicine_response(record, analysis),
                None => self.unknown_medicine_response(id),
            },
            (Intent::SymptomTreatment, _) => self.symptom_response(analysis),
            _ => self.general_response(),
        }
    }

    fn emergency_response(&self) -> MedicalResponse {
        MedicalResponse {
            text: templates::EMERGENCY_TEXT.into(),
            response_type: ResponseType::Emergency,
            confidence: 1.0,
            sources: vec!["Emergency Protocol".into()],
            warnings: vec![templates::EMERGENCY_WARNING.into()],
            disclaimer: templates::STANDARD_DISCLAIMER.into(),
        }
    }

    fn medicine_response(&self, record: &MedicineRecord, analysis: &QueryAnalysis) -> MedicalResponse {
        let name = record.display_name();
        let mut lines = vec![format!("**{}** ({})", name, record.category)];

        match analysis.query_type() {
            QueryType::Uses => {
                lines.push(format!("\n**Uses:** {} is commonly used for:", name));
                lines.extend(bullets(&record.uses));
            }
            QueryType::Dosage => {
                lines.push("\n**Dosage Information:**".into());
                lines.extend(
                    record
                        .dosage
                        .iter()
                        .map(|d| format!("• {}: {}", d.group_label(), d.dosage)),
                );
                lines.push(format!("\n{}", templates::DOSAGE_NOTE));
            }
            QueryType::SideEffects => {
                lines.push("\n**Possible Side Effects:**".into());
                lines.extend(bullets(&record.side_effects));
                lines.push(format!("\n{}", templates::SIDE_EFFECTS_NOTE));
            }
            QueryType::Warnings => {
                lines.push("\n**Important Warnings:**".into());
                lines.extend(bullets(&record.warnings));
            }
            QueryType::Interactions => {
                lines.push("\n**Drug Interactions:**".into());
                lines.extend(bullets(&record.interactions));
            }
            QueryType::General => {
                let uses: Vec<&str> = record
                    .uses
                    .iter()
                    .take(SUMMARY_USES)
                    .map(String::as_str)
                    .collect();
                lines.push(format!("\n**Uses:** {}", uses.join(", ")));
                if let Some(dosage) = record.primary_dosage() {
                    lines.push(format!("\n**Typical Dosage:** {}", dosage));
                }
                if let Some(warning) = record.warnings.first() {
                    lines.push(format!("\n**Key Warnings:** {}", warning));
                }
            }
        }

        if !record.contraindications.is_empty() {
            lines.push("\n**Contraindications:** Do not use if you have:".into());
            lines.extend(bullets(&record.contraindications));
        }

        MedicalResponse {
            text: lines.join("\n"),
            response_type: ResponseType::MedicineInfo,
            confidence: analysis.confidence(),
            sources: vec![format!("Medical Database - {}", name)],
            // Surfaced regardless of which section the text renders
            warnings: record.warnings.iter().take(SURFACED_WARNINGS).cloned().collect(),
            disclaimer: templates::STANDARD_DISCLAIMER.into(),
        }
    }

    fn symptom_response(&self, analysis: &QueryAnalysis) -> MedicalResponse {
        let mut lines = vec!["Based on your symptoms, here are some treatment options:".to_string()];

        for symptom in analysis.symptoms() {
            let records: Vec<&MedicineRecord> = self
                .kb
                .medicines_for_symptom(symptom)
                .iter()
                .filter_map(|id| self.kb.medicine_by_id(id))
                .collect();

            if records.is_empty() {
                continue;
            }

            lines.push(format!("\n**For {}:**", symptom));
            lines.extend(
                records
                    .iter()
                    .map(|m| format!("• {} - {}", m.display_name(), m.category)),
            );
        }

        lines.push("\n**General Advice:**".into());
        lines.extend(templates::GENERAL_ADVICE.iter().map(|a| format!("• {}", a)));

        MedicalResponse {
            text: lines.join("\n"),
            response_type: ResponseType::SymptomTreatment,
            confidence: analysis.confidence(),
            sources: vec!["Symptom-Medicine Database".into()],
            warnings: vec![templates::SYMPTOM_WARNING.into()],
            disclaimer: templates::STANDARD_DISCLAIMER.into(),
        }
    }

    fn general_response(&self) -> MedicalResponse {
        MedicalResponse {
            text: templates::GENERAL_TEXT.into(),
            response_type: ResponseType::General,
            confidence: GENERAL_CONFIDENCE,
            sources: vec!["General Medical Database".into()],
            warnings: Vec::new(),
            disclaimer: templates::STANDARD_DISCLAIMER.into(),
        }
    }

    fn unknown_medicine_response(&self, medicine: &str) -> MedicalResponse {
        let known: Vec<&str> = self.kb.medicine_ids().collect();

        MedicalResponse {
            text: templates::unknown_medicine_text(medicine, &known),
            response_type: ResponseType::UnknownMedicine,
            confidence: UNKNOWN_MEDICINE_CONFIDENCE,
            sources: vec!["General Medical Guidance".into()],
            warnings: vec![templates::UNKNOWN_MEDICINE_WARNING.into()],
            disclaimer: templates::STANDARD_DISCLAIMER.into(),
        }
    }
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("• {}", item))
}
