//! Boundary parsing for user-supplied price tables
//!
//! Admin forms submit price and override tables as JSON text. Parsing
//! happens here, before anything reaches the segment store; malformed
//! input is rejected as [`CatalogError::MalformedOverride`] and surfaced
//! straight back to the input source.

use rust_decimal::Decimal;
use shared::models::PriceEntry;
use shared::{CatalogError, CatalogResult};

/// Parse raw JSON text into a price table.
///
/// Expected shape: `[{"weight": "500 g", "price": 900}, ...]`. Entries
/// must have a non-empty weight label and a non-negative price.
pub fn parse_price_table(raw: &str) -> CatalogResult<Vec<PriceEntry>> {
    let entries: Vec<PriceEntry> = serde_json::from_str(raw)
        .map_err(|e| CatalogError::malformed(format!("invalid price table JSON: {e}")))?;

    for (idx, entry) in entries.iter().enumerate() {
        if entry.weight.trim().is_empty() {
            return Err(CatalogError::malformed(format!(
                "entry {}: weight label must not be empty",
                idx + 1
            )));
        }
        if entry.price < Decimal::ZERO {
            return Err(CatalogError::malformed(format!(
                "entry {}: price must not be negative",
                idx + 1
            )));
        }
    }
    Ok(entries)
}

/// Parse optional raw text; `None` and blank input mean "no table".
pub fn parse_price_table_opt(raw: Option<&str>) -> CatalogResult<Option<Vec<PriceEntry>>> {
    match raw {
        Some(text) if !text.trim().is_empty() => Ok(Some(parse_price_table(text)?)),
        _ => Ok(None),
    }
}
