//! Price Segment Model

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::ProductType;

/// Sentinel segment id that bypasses price resolution entirely; the listing
/// keeps whatever custom table the caller supplied.
pub const CUSTOM_SEGMENT_ID: &str = "custom";

/// One row of a price table ("500 g" -> 900).
///
/// Tables are ordered lists; order is display-significant and never sorted
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Display label for the unit ("500 g", "10 stems", ...)
    pub weight: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl PriceEntry {
    pub fn new(weight: impl Into<String>, price: impl Into<Decimal>) -> Self {
        Self {
            weight: weight.into(),
            price: price.into(),
        }
    }
}

/// Price segment: a named base table plus optional override tiers.
///
/// Overrides are whole-table replacements. The winning tier replaces every
/// entry of the base table; tiers are never merged row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSegment {
    pub id: String,
    pub label: String,
    /// Base/default table
    pub price_table: Vec<PriceEntry>,
    /// Whole-table override per product type
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub per_type: HashMap<ProductType, Vec<PriceEntry>>,
    /// Whole-table override per category id; beats base and per-type
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub per_category: HashMap<String, Vec<PriceEntry>>,
}

impl PriceSegment {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        price_table: Vec<PriceEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price_table,
            per_type: HashMap::new(),
            per_category: HashMap::new(),
        }
    }

    pub fn with_type_override(mut self, product_type: ProductType, table: Vec<PriceEntry>) -> Self {
        self.per_type.insert(product_type, table);
        self
    }

    pub fn with_category_override(
        mut self,
        category_id: impl Into<String>,
        table: Vec<PriceEntry>,
    ) -> Self {
        self.per_category.insert(category_id.into(), table);
        self
    }
}
