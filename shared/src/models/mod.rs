//! Data models
//!
//! Shared between the catalog engine and the admin CRUD layer. All IDs are
//! opaque `String`s (snowflake-generated for store-assigned records).

pub mod category;
pub mod price_segment;
pub mod product_listing;

// Re-exports
pub use category::*;
pub use price_segment::*;
pub use product_listing::*;
