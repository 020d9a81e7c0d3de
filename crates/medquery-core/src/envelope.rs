//! Transport-agnostic request/reply payloads.
//!
//! Any front end (HTTP handler, FFI caller, CLI) can hand a request body to
//! [`handle_query_body`] and forward the returned status and JSON payload.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::assistant::MedicalAssistant;
use crate::models::{Intent, MedicalResponse, MedicineRecord, QueryAnalysis, QueryType};
use crate::query::{QueryError, QueryResult};

/// Number of uses shown per medicine in listings.
const LISTED_USES: usize = 3;

/// Incoming query request body.
///
/// `query` is kept untyped so a non-string value reads as a missing query
/// rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<serde_json::Value>,
}

/// Analysis fields exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSummary {
    pub intent: Intent,
    pub medicine: Option<String>,
    pub symptoms: Vec<String>,
    pub query_type: QueryType,
    pub safety_flags: Vec<String>,
    pub confidence: f64,
}

impl From<&QueryAnalysis> for AnalysisSummary {
    fn from(analysis: &QueryAnalysis) -> Self {
        Self {
            intent: analysis.intent(),
            medicine: analysis.medicine().map(String::from),
            symptoms: analysis.symptoms().to_vec(),
            query_type: analysis.query_type(),
            safety_flags: analysis.safety_flags().to_vec(),
            confidence: analysis.confidence(),
        }
    }
}

/// Successful reply to a medical query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryEnvelope {
    pub response: MedicalResponse,
    pub analysis: AnalysisSummary,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

impl QueryEnvelope {
    pub fn new(analysis: &QueryAnalysis, response: MedicalResponse) -> Self {
        Self {
            response,
            analysis: AnalysisSummary::from(analysis),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error reply. Server-side failures also carry a fallback response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<MedicalResponse>,
}

impl ErrorEnvelope {
    pub fn client(error: &QueryError) -> Self {
        Self {
            error: error.to_string(),
            response: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Internal server error".into(),
            response: Some(MedicalResponse::system_error()),
        }
    }
}

/// Entry in the medicine listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineSummary {
    pub name: String,
    pub category: String,
    pub uses: Vec<String>,
    pub names: Vec<String>,
}

impl From<&MedicineRecord> for MedicineSummary {
    fn from(record: &MedicineRecord) -> Self {
        Self {
            name: record.id.clone(),
            category: record.category.clone(),
            uses: record.uses.iter().take(LISTED_USES).cloned().collect(),
            names: record.aliases.clone(),
        }
    }
}

/// Medicine listing payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineCatalog {
    pub medicines: Vec<MedicineSummary>,
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Outcome class of a reply, mapped to HTTP-style status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Ok,
    BadRequest,
    InternalError,
}

impl ReplyStatus {
    pub fn code(self) -> u16 {
        match self {
            ReplyStatus::Ok => 200,
            ReplyStatus::BadRequest => 400,
            ReplyStatus::InternalError => 500,
        }
    }
}

/// A status plus the JSON payload to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: ReplyStatus,
    pub body: serde_json::Value,
}

impl Reply {
    fn internal_error() -> Self {
        Self {
            status: ReplyStatus::InternalError,
            body: serde_json::json!({
                "error": "Internal server error",
                "response": MedicalResponse::system_error(),
            }),
        }
    }
}

/// Parse a JSON query request and extract a non-empty query string.
pub fn parse_query_request(body: &str) -> QueryResult<String> {
    let request: QueryRequest = serde_json::from_str(body)?;
    match request.query {
        Some(serde_json::Value::String(query)) if !query.trim().is_empty() => Ok(query),
        _ => Err(QueryError::EmptyQuery),
    }
}

/// Handle a raw JSON query body end to end.
///
/// Client mistakes become `BadRequest`; failures after the request was
/// accepted are logged and answered with the generic error envelope.
pub fn handle_query_body(assistant: &MedicalAssistant, body: &str) -> Reply {
    let query = match parse_query_request(body) {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected medical query request");
            return Reply {
                status: ReplyStatus::BadRequest,
                body: to_value(&ErrorEnvelope::client(&e)).unwrap_or_else(|_| {
                    serde_json::json!({ "error": e.to_string() })
                }),
            };
        }
    };

    match assistant.answer(&query).and_then(|envelope| to_value(&envelope)) {
        Ok(body) => Reply {
            status: ReplyStatus::Ok,
            body,
        },
        Err(e) => {
            tracing::error!(error = %e, "Error processing medical query");
            Reply::internal_error()
        }
    }
}

/// Medicine listing reply.
pub fn medicine_catalog(assistant: &MedicalAssistant) -> MedicineCatalog {
    MedicineCatalog {
        medicines: assistant.list_medicines(),
    }
}

fn to_value<T: Serialize>(value: &T) -> QueryResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| QueryError::Serialization(e.to_string()))
}
