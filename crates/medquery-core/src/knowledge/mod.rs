//! Read-only medical knowledge base.
//!
//! Holds medicine records, the symptom index and the emergency phrase list.
//! Iteration order is declaration order everywhere; the analyzer's
//! first-match-wins rules depend on it.

mod dataset;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{MedicineRecord, SymptomMapping};

/// Knowledge base validation and loading errors.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Medicine {0} has no aliases")]
    EmptyAliases(String),

    #[error("Medicine {0} is missing its canonical id from the alias list")]
    MissingCanonicalAlias(String),

    #[error("Duplicate medicine id: {0}")]
    DuplicateMedicine(String),

    #[error("Symptom {0} maps to no medicines")]
    EmptySymptomMapping(String),

    #[error("Symptom {symptom} references unknown medicine {medicine}")]
    UnknownMedicineReference { symptom: String, medicine: String },
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Immutable medicine, symptom and emergency reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    medicines: Vec<MedicineRecord>,
    symptoms: Vec<SymptomMapping>,
    emergency_keywords: Vec<String>,
}

impl KnowledgeBase {
    /// Build a knowledge base from parts, validating every record.
    pub fn new(
        medicines: Vec<MedicineRecord>,
        symptoms: Vec<SymptomMapping>,
        emergency_keywords: Vec<String>,
    ) -> KnowledgeResult<Self> {
        let kb = Self {
            medicines,
            symptoms,
            emergency_keywords,
        };
        kb.validate()?;
        Ok(kb)
    }

    /// The built-in dataset of common over-the-counter and prescription medicines.
    pub fn builtin() -> Self {
        Self {
            medicines: dataset::medicines(),
            symptoms: dataset::symptoms(),
            emergency_keywords: dataset::emergency_keywords(),
        }
    }

    /// Load a knowledge base from its JSON representation.
    ///
    /// Layout: `{"medicines": [...], "symptoms": [...], "emergency_keywords": [...]}`.
    /// Arrays keep iteration order stable.
    pub fn from_json(json: &str) -> KnowledgeResult<Self> {
        let kb: KnowledgeBase = serde_json::from_str(json)?;
        kb.validate()?;
        Ok(kb)
    }

    /// Check record shape and cross references.
    pub fn validate(&self) -> KnowledgeResult<()> {
        let mut seen = HashSet::new();

        for medicine in &self.medicines {
            if medicine.aliases.is_empty() {
                return Err(KnowledgeError::EmptyAliases(medicine.id.clone()));
            }
            if !medicine.has_canonical_alias() {
                return Err(KnowledgeError::MissingCanonicalAlias(medicine.id.clone()));
            }
            if !seen.insert(medicine.id.as_str()) {
                return Err(KnowledgeError::DuplicateMedicine(medicine.id.clone()));
            }
        }

        for mapping in &self.symptoms {
            if mapping.medicines.is_empty() {
                return Err(KnowledgeError::EmptySymptomMapping(mapping.label.clone()));
            }
            if let Some(unknown) = mapping.medicines.iter().find(|id| !seen.contains(id.as_str())) {
                return Err(KnowledgeError::UnknownMedicineReference {
                    symptom: mapping.label.clone(),
                    medicine: unknown.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn medicine_by_id(&self, id: &str) -> Option<&MedicineRecord> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn medicines(&self) -> &[MedicineRecord] {
        &self.medicines
    }

    /// Canonical ids in knowledge base order.
    pub fn medicine_ids(&self) -> impl Iterator<Item = &str> {
        self.medicines.iter().map(|m| m.id.as_str())
    }

    pub fn symptoms(&self) -> &[SymptomMapping] {
        &self.symptoms
    }

    /// Medicines suggested for a symptom. Empty for unknown labels.
    pub fn medicines_for_symptom(&self, label: &str) -> &[String] {
        self.symptoms
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.medicines.as_slice())
            .unwrap_or(&[])
    }

    pub fn emergency_keywords(&self) -> &[String] {
        &self.emergency_keywords
    }

    /// Check if the text contains any emergency phrase.
    pub fn is_emergency_phrase(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.emergency_keywords
            .iter()
            .any(|k| lower.contains(k.to_lowercase().as_str()))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
