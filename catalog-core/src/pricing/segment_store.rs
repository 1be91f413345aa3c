//! Price segment store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{PriceEntry, PriceSegment, ProductType};
use shared::CatalogResult;

use crate::persist::{MemorySnapshot, SegmentSnapshot, SnapshotStore};

/// Owns the price segment collection (base tables + override tiers).
///
/// Upserts replace whole segments by id; beyond structural shape nothing is
/// validated here — malformed override input is rejected at the parsing
/// boundary before it reaches the store.
pub struct PriceSegmentStore {
    persist: Arc<dyn SnapshotStore<SegmentSnapshot>>,
    items: RwLock<HashMap<String, PriceSegment>>,
}

impl std::fmt::Debug for PriceSegmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceSegmentStore")
            .field("count", &self.items.read().len())
            .finish()
    }
}

impl PriceSegmentStore {
    pub fn new(persist: Arc<dyn SnapshotStore<SegmentSnapshot>>) -> Self {
        Self {
            persist,
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Store backed by an in-memory snapshot (tests, ephemeral embedders).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySnapshot::open_in_memory()))
    }

    /// Load the persisted snapshot into memory, replacing current contents.
    pub fn warmup(&self) -> CatalogResult<()> {
        if let Some(snapshot) = self.persist.load()? {
            let mut items = self.items.write();
            items.clear();
            for segment in snapshot.items {
                items.insert(segment.id.clone(), segment);
            }
            tracing::info!(count = items.len(), "loaded price segment snapshot");
        }
        Ok(())
    }

    /// Create or replace a segment by id.
    pub fn upsert(&self, segment: PriceSegment) -> CatalogResult<PriceSegment> {
        let mut items = self.items.write();
        let mut next = items.clone();
        next.insert(segment.id.clone(), segment.clone());

        let snapshot = SegmentSnapshot {
            items: next.values().cloned().collect(),
        };
        self.persist.save(&snapshot)?;
        *items = next;

        tracing::info!(id = %segment.id, label = %segment.label, "price segment upserted");
        Ok(segment)
    }

    pub fn get(&self, id: &str) -> Option<PriceSegment> {
        self.items.read().get(id).cloned()
    }

    /// All segments, ordered by id for deterministic listings.
    pub fn list(&self) -> Vec<PriceSegment> {
        let mut out: Vec<PriceSegment> = self.items.read().values().cloned().collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Seed the stock tier1/tier2 segments when the store is empty.
    /// No-op once any segment exists.
    pub fn seed_defaults(&self) -> CatalogResult<()> {
        if !self.items.read().is_empty() {
            return Ok(());
        }

        let tier1 = PriceSegment::new(
            "tier1",
            "Tier 1",
            vec![
                PriceEntry::new("500 g", 599),
                PriceEntry::new("1 kg", 1099),
                PriceEntry::new("1.5 kg", 1599),
            ],
        )
        // different price units for flowers
        .with_type_override(
            ProductType::Flowers,
            vec![
                PriceEntry::new("10 stems", 499),
                PriceEntry::new("20 stems", 899),
                PriceEntry::new("30 stems", 1299),
            ],
        );

        let tier2 = PriceSegment::new(
            "tier2",
            "Tier 2 (Premium)",
            vec![
                PriceEntry::new("500 g", 900),
                PriceEntry::new("1 kg", 1799),
                PriceEntry::new("1.5 kg", 2199),
            ],
        )
        .with_type_override(
            ProductType::Flowers,
            vec![
                PriceEntry::new("10 stems", 799),
                PriceEntry::new("20 stems", 1499),
                PriceEntry::new("30 stems", 2099),
            ],
        )
        // category-specific premium for designer cakes
        .with_category_override(
            "designer-cakes",
            vec![
                PriceEntry::new("500 g", 1199),
                PriceEntry::new("1 kg", 2299),
                PriceEntry::new("1.5 kg", 2999),
            ],
        );

        self.upsert(tier1)?;
        self.upsert(tier2)?;
        tracing::info!("seeded default price segments");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_and_get() {
        let store = PriceSegmentStore::in_memory();
        assert!(store.get("tier1").is_none());

        store
            .upsert(PriceSegment::new(
                "tier1",
                "Tier 1",
                vec![PriceEntry::new("500 g", 599)],
            ))
            .unwrap();
        assert_eq!(store.get("tier1").unwrap().label, "Tier 1");

        // replace, not merge
        store
            .upsert(PriceSegment::new(
                "tier1",
                "Tier 1 (new)",
                vec![PriceEntry::new("1 kg", 1099)],
            ))
            .unwrap();
        let segment = store.get("tier1").unwrap();
        assert_eq!(segment.label, "Tier 1 (new)");
        assert_eq!(segment.price_table, vec![PriceEntry::new("1 kg", 1099)]);
    }

    #[test]
    fn test_list_sorted_by_id() {
        let store = PriceSegmentStore::in_memory();
        store
            .upsert(PriceSegment::new("tier2", "B", vec![]))
            .unwrap();
        store
            .upsert(PriceSegment::new("tier1", "A", vec![]))
            .unwrap();
        let ids: Vec<String> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["tier1", "tier2"]);
    }

    #[test]
    fn test_seed_defaults_is_idempotent() {
        let store = PriceSegmentStore::in_memory();
        store.seed_defaults().unwrap();
        assert_eq!(store.list().len(), 2);

        store
            .upsert(PriceSegment::new("tier1", "Edited", vec![]))
            .unwrap();
        store.seed_defaults().unwrap();
        // no reset of edited data
        assert_eq!(store.get("tier1").unwrap().label, "Edited");
    }

    #[test]
    fn test_warmup_restores_persisted_state() {
        let persist = Arc::new(MemorySnapshot::open_in_memory());
        let store = PriceSegmentStore::new(persist.clone());
        store.seed_defaults().unwrap();

        let reopened = PriceSegmentStore::new(persist);
        assert!(reopened.list().is_empty());
        reopened.warmup().unwrap();
        assert_eq!(reopened.list().len(), 2);
    }
}
