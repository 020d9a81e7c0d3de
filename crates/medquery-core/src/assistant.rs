//! Top-level query pipeline.

use std::sync::Arc;

use crate::config::AssistantConfig;
use crate::envelope::{MedicineSummary, QueryEnvelope};
use crate::knowledge::KnowledgeBase;
use crate::models::{MedicalResponse, QueryAnalysis};
use crate::query::{Normalizer, QueryAnalyzer, QueryError, QueryResult};
use crate::response::ResponseGenerator;

/// Coordinates normalization, analysis and response generation.
///
/// Cheap to clone; the knowledge base is shared, never copied.
#[derive(Debug, Clone)]
pub struct MedicalAssistant {
    kb: Arc<KnowledgeBase>,
    config: AssistantConfig,
}

impl Default for MedicalAssistant {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()), AssistantConfig::default())
    }
}

impl MedicalAssistant {
    pub fn new(kb: Arc<KnowledgeBase>, config: AssistantConfig) -> Self {
        Self { kb, config }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.kb, &self.config.normalizer)
    }

    pub fn analyzer(&self) -> QueryAnalyzer<'_> {
        QueryAnalyzer::new(&self.kb, &self.config.normalizer)
    }

    pub fn generator(&self) -> ResponseGenerator<'_> {
        ResponseGenerator::new(&self.kb)
    }

    /// Analyze a query without rendering a response.
    pub fn analyze(&self, raw_text: &str) -> QueryAnalysis {
        let analysis = self.analyzer().analyze(raw_text);

        if analysis.is_emergency() {
            tracing::warn!(
                flag_count = analysis.safety_flags().len(),
                flags = ?analysis.safety_flags(),
                "Emergency keywords detected"
            );
        }
        tracing::debug!(
            intent = %analysis.intent(),
            query_type = %analysis.query_type(),
            medicine = ?analysis.medicine(),
            symptom_count = analysis.symptoms().len(),
            confidence = analysis.confidence(),
            "Query analyzed"
        );

        analysis
    }

    /// Run the full pipeline: normalize → analyze → generate.
    pub fn process_query(&self, raw_text: &str) -> MedicalResponse {
        self.respond(raw_text).1
    }

    /// Run the pipeline, returning the analysis alongside the response.
    pub fn respond(&self, raw_text: &str) -> (QueryAnalysis, MedicalResponse) {
        tracing::info!(
            query = %preview(raw_text, self.config.log_preview_chars),
            "Processing medical query"
        );

        let analysis = self.analyze(raw_text);
        let response = self.generator().generate(&analysis);
        (analysis, response)
    }

    /// Answer a query for a caller, rejecting empty text before the pipeline runs.
    pub fn answer(&self, raw_text: &str) -> QueryResult<QueryEnvelope> {
        if raw_text.trim().is_empty() {
            tracing::warn!("Rejected empty medical query");
            return Err(QueryError::EmptyQuery);
        }

        let (analysis, response) = self.respond(raw_text);
        Ok(QueryEnvelope::new(&analysis, response))
    }

    /// Medicine listing in knowledge base order.
    pub fn list_medicines(&self) -> Vec<MedicineSummary> {
        self.kb.medicines().iter().map(MedicineSummary::from).collect()
    }
}

/// First `max_chars` characters of a query, with an ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
