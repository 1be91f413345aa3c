//! Shared types for the catalog core
//!
//! Data models and the unified error type used by the engine crate and by
//! any embedding CRUD layer. Kept free of engine logic so both sides agree
//! on the same wire-friendly shapes.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{CatalogError, CatalogResult};
pub use serde::{Deserialize, Serialize};
