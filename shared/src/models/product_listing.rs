//! Product Listing Model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::category::ProductType;
use super::price_segment::PriceEntry;

/// Assembled product listing.
///
/// `price_table` is a point-in-time snapshot of the resolution result;
/// later edits to the source segment do not flow back into a listing that
/// has already been assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub product_type: ProductType,
    /// Open key -> value map; keys are governed by the per-type field schema
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub sku: String,
    pub slug: String,
    /// Opaque image references, handled by an external uploader
    pub primary_image: Option<String>,
    #[serde(default)]
    pub secondary_images: Vec<String>,
    pub primary_category_id: Option<String>,
    /// Additional classification on top of the primary category
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub price_segment_id: String,
    pub price_table: Vec<PriceEntry>,
    /// Assembly timestamp (Unix millis)
    pub created_at: i64,
}

/// Raw input for listing assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListingInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub product_type: ProductType,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub sku: String,
    /// Derived from the title when absent
    pub slug: Option<String>,
    pub primary_image: Option<String>,
    #[serde(default)]
    pub secondary_images: Vec<String>,
    pub primary_category_id: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub price_segment_id: String,
    /// Only honored when `price_segment_id` is [`super::CUSTOM_SEGMENT_ID`]
    pub custom_price_table: Option<Vec<PriceEntry>>,
}
