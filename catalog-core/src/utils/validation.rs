//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! store boundaries. Limits are UX-driven; the persistence layer enforces
//! nothing on its own.

use shared::{CatalogError, CatalogResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category titles, segment labels, listing titles.
pub const MAX_NAME_LEN: usize = 200;

/// Slugs and other short identifiers.
pub const MAX_SLUG_LEN: usize = 100;

/// Icon and image references.
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(format!(
            "{field} must not be empty"
        )));
    }
    if value.len() > max_len {
        return Err(CatalogError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> CatalogResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(CatalogError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
