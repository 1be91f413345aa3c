//! Effective price resolution
//!
//! Precedence, highest first: per-category override, per-type override,
//! base table. The winning tier replaces the whole table; tiers are never
//! merged row by row.

use std::sync::Arc;

use shared::models::{PriceEntry, ProductType};

use crate::pricing::PriceSegmentStore;

/// Product context a price lookup runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceContext {
    pub product_type: Option<ProductType>,
    pub category_id: Option<String>,
}

impl PriceContext {
    pub fn for_type(product_type: ProductType) -> Self {
        Self {
            product_type: Some(product_type),
            ..Self::default()
        }
    }

    pub fn for_category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            ..Self::default()
        }
    }
}

/// Resolves the effective price table for a segment and product context.
#[derive(Clone)]
pub struct PriceResolver {
    segments: Arc<PriceSegmentStore>,
}

impl std::fmt::Debug for PriceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceResolver").finish()
    }
}

impl PriceResolver {
    pub fn new(segments: Arc<PriceSegmentStore>) -> Self {
        Self { segments }
    }

    /// Resolve the effective table.
    ///
    /// An unknown segment id resolves to an empty table rather than an
    /// error; absence of pricing is representable and surfaced by listing
    /// validation upstream.
    pub fn resolve(&self, segment_id: &str, ctx: &PriceContext) -> Vec<PriceEntry> {
        let Some(segment) = self.segments.get(segment_id) else {
            tracing::warn!(segment_id, "price segment not found, resolving to empty table");
            return Vec::new();
        };

        if let Some(category_id) = ctx.category_id.as_deref()
            && let Some(table) = segment.per_category.get(category_id)
        {
            tracing::debug!(segment_id, category_id, "per-category override won");
            return table.clone();
        }

        if let Some(product_type) = ctx.product_type
            && let Some(table) = segment.per_type.get(&product_type)
        {
            tracing::debug!(segment_id, %product_type, "per-type override won");
            return table.clone();
        }

        segment.price_table.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PriceSegment;

    fn base() -> Vec<PriceEntry> {
        vec![PriceEntry::new("500 g", 900), PriceEntry::new("1 kg", 1799)]
    }

    fn flowers_table() -> Vec<PriceEntry> {
        vec![PriceEntry::new("10 stems", 799)]
    }

    fn designer_table() -> Vec<PriceEntry> {
        vec![PriceEntry::new("500 g", 1199), PriceEntry::new("1 kg", 2299)]
    }

    fn resolver_with_tier2() -> PriceResolver {
        let store = Arc::new(PriceSegmentStore::in_memory());
        store
            .upsert(
                PriceSegment::new("tier2", "Tier 2 (Premium)", base())
                    .with_type_override(ProductType::Flowers, flowers_table())
                    .with_category_override("designer-cakes", designer_table()),
            )
            .unwrap();
        PriceResolver::new(store)
    }

    #[test]
    fn test_base_table_when_context_empty() {
        let resolver = resolver_with_tier2();
        assert_eq!(resolver.resolve("tier2", &PriceContext::default()), base());
    }

    #[test]
    fn test_per_type_override_wins_over_base() {
        let resolver = resolver_with_tier2();
        assert_eq!(
            resolver.resolve("tier2", &PriceContext::for_type(ProductType::Flowers)),
            flowers_table()
        );
        // non-matching type falls through to base
        assert_eq!(
            resolver.resolve("tier2", &PriceContext::for_type(ProductType::Cake)),
            base()
        );
    }

    #[test]
    fn test_per_category_override_beats_per_type() {
        let resolver = resolver_with_tier2();
        // category wins even when the product type would also match
        let ctx = PriceContext {
            product_type: Some(ProductType::Flowers),
            category_id: Some("designer-cakes".to_string()),
        };
        assert_eq!(resolver.resolve("tier2", &ctx), designer_table());
    }

    #[test]
    fn test_non_matching_category_falls_through() {
        let resolver = resolver_with_tier2();
        let ctx = PriceContext {
            product_type: Some(ProductType::Flowers),
            category_id: Some("birthday-cakes".to_string()),
        };
        assert_eq!(resolver.resolve("tier2", &ctx), flowers_table());
    }

    #[test]
    fn test_unknown_segment_resolves_empty() {
        let resolver = resolver_with_tier2();
        assert!(resolver.resolve("tier9", &PriceContext::default()).is_empty());
    }

    #[test]
    fn test_designer_cakes_scenario() {
        // segment tier2: base [{500g,900},{1kg,1799}],
        // per_category["designer-cakes"] = [{500g,1199},{1kg,2299}]
        let resolver = resolver_with_tier2();
        let table = resolver.resolve("tier2", &PriceContext::for_category("designer-cakes"));
        assert_eq!(
            table,
            vec![PriceEntry::new("500 g", 1199), PriceEntry::new("1 kg", 2299)]
        );
    }
}
