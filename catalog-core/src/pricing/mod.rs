//! Price resolution engine
//!
//! Segments carry a base table plus optional per-type and per-category
//! override tiers; the resolver picks the winning tier for a product
//! context. Raw override text from admin forms is parsed at the boundary
//! before it can reach the store.

mod parse;
mod resolver;
mod segment_store;

pub use parse::*;
pub use resolver::*;
pub use segment_store::*;
