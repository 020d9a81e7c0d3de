//! Query understanding for free-text medical questions.
//!
//! Pipeline: Normalization → Safety Flags → Extraction → Classification

mod analyzer;
mod normalizer;

pub use analyzer::*;
pub use normalizer::*;

use thiserror::Error;

/// Errors raised at the query boundary. The analysis itself never fails.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("No query provided")]
    EmptyQuery,

    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
