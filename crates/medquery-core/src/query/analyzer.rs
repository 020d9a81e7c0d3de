//! Query analyzer: safety flags, entity extraction, classification.

use crate::config::NormalizerConfig;
use crate::knowledge::KnowledgeBase;
use crate::models::{QueryAnalysis, QueryType};

use super::Normalizer;

/// Analyzer producing a [`QueryAnalysis`] from raw text.
pub struct QueryAnalyzer<'a> {
    kb: &'a KnowledgeBase,
    normalizer: Normalizer<'a>,
}

impl<'a> QueryAnalyzer<'a> {
    /// Create a new analyzer.
    pub fn new(kb: &'a KnowledgeBase, config: &'a NormalizerConfig) -> Self {
        Self {
            kb,
            normalizer: Normalizer::new(kb, config),
        }
    }

    /// Normalize and analyze a raw query.
    pub fn analyze(&self, raw_text: &str) -> QueryAnalysis {
        let normalized = self.normalizer.normalize(raw_text);

        let safety_flags = self.check_safety_flags(&normalized);
        let medicine = self.extract_medicine(&normalized);
        let symptoms = self.extract_symptoms(&normalized);
        let query_type = classify_query_type(&normalized);

        QueryAnalysis::new(
            raw_text.to_string(),
            normalized,
            medicine,
            symptoms,
            query_type,
            safety_flags,
        )
    }

    /// Every emergency phrase contained in the text, in knowledge base order.
    pub fn check_safety_flags(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.kb
            .emergency_keywords()
            .iter()
            .filter(|k| lower.contains(k.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    /// Id of the first medicine with an alias in the text.
    ///
    /// At most one medicine is reported even if several are named.
    pub fn extract_medicine(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        self.kb
            .medicines()
            .iter()
            .find(|m| m.mentioned_in(&lower))
            .map(|m| m.id.clone())
    }

    /// Every symptom label contained in the text.
    pub fn extract_symptoms(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.kb
            .symptoms()
            .iter()
            .filter(|s| lower.contains(s.label.to_lowercase().as_str()))
            .map(|s| s.label.clone())
            .collect()
    }

    pub fn normalizer(&self) -> &Normalizer<'a> {
        &self.normalizer
    }
}

/// Classify the query type by keyword groups, first group in priority order wins.
pub fn classify_query_type(text: &str) -> QueryType {
    QueryType::PRIORITY
        .iter()
        .copied()
        .find(|qt| qt.keywords().iter().any(|k| text.contains(k)))
        .unwrap_or(QueryType::General)
}
