//! Catalog error types
//!
//! All store-level failures are synchronous returns of [`CatalogError`]; a
//! failed mutation leaves the owning store in its pre-call state.

use thiserror::Error;

/// Error taxonomy for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Referenced id (category, segment) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Slug or id collision within a collection.
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Reparent would make a category its own ancestor.
    #[error("Cycle: {0}")]
    Cycle(String),

    /// Delete attempted on a category with existing children.
    #[error("Has children: {0}")]
    HasChildren(String),

    /// A field failed input validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// User-supplied override table failed to parse; never reaches a store.
    #[error("Malformed override: {0}")]
    MalformedOverride(String),

    /// Snapshot load/save failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result alias used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Create a not found error for a resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a malformed override error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOverride(msg.into())
    }
}
