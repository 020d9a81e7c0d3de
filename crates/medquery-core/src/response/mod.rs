//! Template-based response generation.

mod generator;
pub mod templates;

pub use generator::*;
