//! Knowledge base record models.

use serde::{Deserialize, Serialize};

/// A single medicine in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineRecord {
    /// Canonical identifier (e.g., "paracetamol")
    pub id: String,
    /// Brand and generic names used for matching and fuzzy correction
    pub aliases: Vec<String>,
    /// Classification label (e.g., "NSAID/Antiplatelet")
    pub category: String,
    pub uses: Vec<String>,
    /// Dosage by age group or use case, in display order
    pub dosage: Vec<DosageEntry>,
    pub side_effects: Vec<String>,
    pub warnings: Vec<String>,
    pub contraindications: Vec<String>,
    pub interactions: Vec<String>,
}

/// Dosage guidance for one age group or use case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DosageEntry {
    /// Group label in snake_case (e.g., "adult", "child_6_12")
    pub group: String,
    pub dosage: String,
}

/// Symptom label mapped to the medicines suggested for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomMapping {
    pub label: String,
    pub medicines: Vec<String>,
}

impl MedicineRecord {
    /// Create a record with only the identifying fields populated.
    ///
    /// The canonical id is registered as the first alias.
    pub fn new(id: String, category: String) -> Self {
        Self {
            aliases: vec![id.clone()],
            id,
            category,
            uses: Vec::new(),
            dosage: Vec::new(),
            side_effects: Vec::new(),
            warnings: Vec::new(),
            contraindications: Vec::new(),
            interactions: Vec::new(),
        }
    }

    /// Display name: the id with its first letter upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    /// Check whether any alias occurs in the (already lower-cased) text.
    pub fn mentioned_in(&self, text: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| text.contains(alias.to_lowercase().as_str()))
    }

    /// Check whether the canonical id is one of the aliases.
    pub fn has_canonical_alias(&self) -> bool {
        let id_lower = self.id.to_lowercase();
        self.aliases.iter().any(|a| a.to_lowercase() == id_lower)
    }

    /// First dosage string, if any.
    pub fn primary_dosage(&self) -> Option<&str> {
        self.dosage.first().map(|d| d.dosage.as_str())
    }
}

impl DosageEntry {
    pub fn new(group: &str, dosage: &str) -> Self {
        Self {
            group: group.into(),
            dosage: dosage.into(),
        }
    }

    /// Human-readable group label: underscores become spaces, words title-cased.
    ///
    /// `"child_6_12"` renders as `"Child 6 12"`, `"h_pylori"` as `"H Pylori"`.
    pub fn group_label(&self) -> String {
        self.group
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
