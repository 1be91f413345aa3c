//! Listing assembly and validation
//!
//! Assembly resolves prices through the segment store (or keeps a custom
//! table) and produces an immutable listing snapshot. Validation collects
//! human-readable problems without ever blocking assembly.

mod assembler;
pub mod fields;
mod validation;

pub use assembler::*;
pub use validation::*;
