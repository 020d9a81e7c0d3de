//! Domain models for the medquery system.

mod analysis;
mod medicine;
mod response;

pub use analysis::*;
pub use medicine::*;
pub use response::*;
