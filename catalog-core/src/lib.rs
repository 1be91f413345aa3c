//! Catalog core engines
//!
//! Library consumed by the admin CRUD layer. Owns the category hierarchy
//! engine (product-type inheritance, propagation, structural guards) and
//! the price resolution engine (base / per-type / per-category override
//! tiers), plus listing assembly and validation on top of them.
//!
//! The core has no wire protocol: stores expose synchronous operations,
//! persistence is injected behind [`persist::SnapshotStore`], and every
//! mutation is atomic from the caller's point of view.

pub mod category;
pub mod listing;
pub mod persist;
pub mod pricing;
pub mod utils;

// Re-exports
pub use category::CategoryStore;
pub use listing::{ListingAssembler, validate_listing};
pub use persist::{
    CategorySnapshot, JsonSnapshotFile, MemorySnapshot, SegmentSnapshot, SnapshotStore,
};
pub use pricing::{PriceContext, PriceResolver, PriceSegmentStore, parse_price_table};
