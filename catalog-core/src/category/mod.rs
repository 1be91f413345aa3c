//! Category hierarchy engine
//!
//! A flat collection with parent references (no nested child lists):
//! traversals are computed on demand so a reparent stays a single-field
//! update plus a propagation pass.

pub mod store;
pub mod tree;

pub use store::CategoryStore;
