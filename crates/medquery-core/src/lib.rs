//! Medquery Core Library
//!
//! Rule-based medical query classifier with templated, safety-first responses.
//!
//! # Architecture
//!
//! ```text
//! Raw query text
//!       │
//!       ▼
//!   Normalizer ── filler removal, fuzzy medicine-name correction
//!       │
//!       ▼
//!   Analyzer ──── safety flags, medicine/symptom extraction,
//!       │         query type, intent, confidence
//!       ▼
//!   Generator ─── emergency │ medicine info │ symptom treatment
//!       │                   │ unknown medicine │ general
//!       ▼
//!   MedicalResponse + disclaimer
//! ```
//!
//! # Core Principle
//!
//! **Emergencies pre-empt everything.** Any emergency phrase in a query
//! yields the emergency response, whatever else the query mentions.
//!
//! # Modules
//!
//! - [`knowledge`]: Read-only medicine, symptom and emergency data
//! - [`models`]: Domain types (MedicineRecord, QueryAnalysis, MedicalResponse, etc.)
//! - [`query`]: Normalizer and analyzer
//! - [`response`]: Response templates and generator
//! - [`envelope`]: Request/reply payloads for front ends
//! - [`config`]: Assistant configuration

pub mod assistant;
pub mod config;
pub mod envelope;
pub mod knowledge;
pub mod models;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use assistant::MedicalAssistant;
pub use config::{AssistantConfig, NormalizerConfig};
pub use envelope::{handle_query_body, QueryEnvelope, Reply, ReplyStatus};
pub use knowledge::KnowledgeBase;
pub use models::{
    Intent, MedicalResponse, MedicineRecord, QueryAnalysis, QueryType, ResponseType,
};
pub use query::{Normalizer, QueryAnalyzer, QueryError};
pub use response::ResponseGenerator;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedQueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<query::QueryError> for MedQueryError {
    fn from(e: query::QueryError) -> Self {
        match e {
            QueryError::Serialization(msg) => MedQueryError::SerializationError(msg),
            other => MedQueryError::InvalidInput(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for MedQueryError {
    fn from(e: config::ConfigError) -> Self {
        MedQueryError::ConfigError(e.to_string())
    }
}

impl From<knowledge::KnowledgeError> for MedQueryError {
    fn from(e: knowledge::KnowledgeError) -> Self {
        MedQueryError::KnowledgeError(e.to_string())
    }
}

impl From<serde_json::Error> for MedQueryError {
    fn from(e: serde_json::Error) -> Self {
        MedQueryError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an assistant over the built-in knowledge base.
#[uniffi::export]
pub fn open_assistant() -> Arc<MedQueryCore> {
    Arc::new(MedQueryCore {
        assistant: MedicalAssistant::default(),
    })
}

/// Create an assistant from a JSON config and an optional JSON knowledge base.
#[uniffi::export]
pub fn open_assistant_with_config(
    config_json: String,
    knowledge_json: Option<String>,
) -> Result<Arc<MedQueryCore>, MedQueryError> {
    let config = AssistantConfig::from_json(&config_json)?;
    let kb = match knowledge_json {
        Some(json) => KnowledgeBase::from_json(&json)?,
        None => KnowledgeBase::builtin(),
    };

    Ok(Arc::new(MedQueryCore {
        assistant: MedicalAssistant::new(Arc::new(kb), config),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe assistant handle for FFI. Holds no mutable state.
#[derive(uniffi::Object)]
pub struct MedQueryCore {
    assistant: MedicalAssistant,
}

#[uniffi::export]
impl MedQueryCore {
    /// Answer a query. Empty text is rejected.
    pub fn process_query(&self, query: String) -> Result<FfiQueryOutcome, MedQueryError> {
        let envelope = self.assistant.answer(&query)?;
        Ok(envelope.into())
    }

    /// Analyze a query without generating a response.
    pub fn analyze_query(&self, query: String) -> FfiQueryAnalysis {
        (&self.assistant.analyze(&query)).into()
    }

    /// List known medicines in knowledge base order.
    pub fn list_medicines(&self) -> Vec<FfiMedicineSummary> {
        self.assistant
            .list_medicines()
            .into_iter()
            .map(|m| m.into())
            .collect()
    }

    /// Handle a JSON request body, returning the JSON reply body and status code.
    pub fn handle_query_json(&self, body: String) -> Result<FfiJsonReply, MedQueryError> {
        let reply = handle_query_body(&self.assistant, &body);
        Ok(FfiJsonReply {
            status_code: reply.status.code(),
            body: serde_json::to_string(&reply.body)?,
        })
    }

    /// Health payload as JSON.
    pub fn health(&self) -> Result<String, MedQueryError> {
        Ok(serde_json::to_string(&envelope::HealthStatus::healthy())?)
    }
}

// =========================================================================
// FFI-Safe Types
// =========================================================================

/// FFI-safe response.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicalResponse {
    pub text: String,
    pub response_type: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

impl From<MedicalResponse> for FfiMedicalResponse {
    fn from(response: MedicalResponse) -> Self {
        Self {
            text: response.text,
            response_type: response.response_type.to_string(),
            confidence: response.confidence,
            sources: response.sources,
            warnings: response.warnings,
            disclaimer: response.disclaimer,
        }
    }
}

/// FFI-safe query analysis.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQueryAnalysis {
    pub original_text: String,
    pub normalized_text: String,
    pub intent: String,
    pub medicine: Option<String>,
    pub symptoms: Vec<String>,
    pub query_type: String,
    pub safety_flags: Vec<String>,
    pub confidence: f64,
}

impl From<&QueryAnalysis> for FfiQueryAnalysis {
    fn from(analysis: &QueryAnalysis) -> Self {
        Self {
            original_text: analysis.original_text().to_string(),
            normalized_text: analysis.normalized_text().to_string(),
            intent: analysis.intent().to_string(),
            medicine: analysis.medicine().map(String::from),
            symptoms: analysis.symptoms().to_vec(),
            query_type: analysis.query_type().to_string(),
            safety_flags: analysis.safety_flags().to_vec(),
            confidence: analysis.confidence(),
        }
    }
}

/// FFI-safe answer: response plus analysis summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQueryOutcome {
    pub response: FfiMedicalResponse,
    pub intent: String,
    pub medicine: Option<String>,
    pub symptoms: Vec<String>,
    pub query_type: String,
    pub safety_flags: Vec<String>,
    pub timestamp: String,
}

impl From<QueryEnvelope> for FfiQueryOutcome {
    fn from(envelope: QueryEnvelope) -> Self {
        Self {
            response: envelope.response.into(),
            intent: envelope.analysis.intent.to_string(),
            medicine: envelope.analysis.medicine,
            symptoms: envelope.analysis.symptoms,
            query_type: envelope.analysis.query_type.to_string(),
            safety_flags: envelope.analysis.safety_flags,
            timestamp: envelope.timestamp,
        }
    }
}

/// FFI-safe medicine listing entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicineSummary {
    pub name: String,
    pub category: String,
    pub uses: Vec<String>,
    pub names: Vec<String>,
}

impl From<envelope::MedicineSummary> for FfiMedicineSummary {
    fn from(summary: envelope::MedicineSummary) -> Self {
        Self {
            name: summary.name,
            category: summary.category,
            uses: summary.uses,
            names: summary.names,
        }
    }
}

/// FFI-safe JSON reply.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiJsonReply {
    pub status_code: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_process_query() {
        let core = open_assistant();
        let outcome = core.process_query("Tell me about Tylenol".into()).unwrap();

        assert_eq!(outcome.medicine.as_deref(), Some("paracetamol"));
        assert_eq!(outcome.intent, "medicine_info");
        assert_eq!(outcome.query_type, "general");
        assert_eq!(outcome.response.response_type, "medicine_info");
    }

    #[test]
    fn test_ffi_rejects_empty_query() {
        let core = open_assistant();
        let result = core.process_query(String::new());

        assert!(matches!(result, Err(MedQueryError::InvalidInput(msg)) if msg == "No query provided"));
    }

    #[test]
    fn test_ffi_analyze_query() {
        let core = open_assistant();
        let analysis = core.analyze_query("I have heartburn".into());

        assert_eq!(analysis.symptoms, vec!["heartburn".to_string()]);
        assert_eq!(analysis.intent, "symptom_treatment");
        assert_eq!(analysis.normalized_text, "i have heartburn");
    }

    #[test]
    fn test_ffi_list_medicines() {
        let core = open_assistant();
        let medicines = core.list_medicines();

        assert_eq!(medicines.len(), 6);
        assert_eq!(medicines[3].name, "cetirizine");
    }

    #[test]
    fn test_ffi_handle_query_json() {
        let core = open_assistant();

        let reply = core.handle_query_json(r#"{"query": "advil side effects"}"#.into()).unwrap();
        assert_eq!(reply.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(body["analysis"]["query_type"], "side_effects");

        let reply = core.handle_query_json("{}".into()).unwrap();
        assert_eq!(reply.status_code, 400);
    }

    #[test]
    fn test_ffi_health() {
        let core = open_assistant();
        let health: serde_json::Value = serde_json::from_str(&core.health().unwrap()).unwrap();
        assert_eq!(health["status"], "healthy");
    }

    #[test]
    fn test_open_with_config() {
        let core = open_assistant_with_config(
            r#"{"normalizer": {"strip_multi_word_fillers": true}}"#.into(),
            None,
        )
        .unwrap();
        let analysis = core.analyze_query("you know aspirin".into());
        assert_eq!(analysis.normalized_text, "aspirin");

        let result = open_assistant_with_config(
            r#"{"normalizer": {"similarity_threshold": -1.0}}"#.into(),
            None,
        );
        assert!(matches!(result, Err(MedQueryError::ConfigError(_))));

        let result = open_assistant_with_config("{}".into(), Some("{}".into()));
        assert!(matches!(result, Err(MedQueryError::KnowledgeError(_))));
    }
}
