//! Snapshot persistence seam
//!
//! The core only needs whole-collection load/save with last-writer-wins
//! semantics; encoding and backing store stay opaque to the engines. Stores
//! are constructed with an injected [`SnapshotStore`] so multiple instances
//! (per tenant, per test) can coexist without global state.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::models::{Category, PriceSegment};
use shared::{CatalogError, CatalogResult};

/// Persisted category collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub items: Vec<Category>,
}

/// Persisted price segment collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub items: Vec<PriceSegment>,
}

/// Load/save contract for a whole-collection snapshot.
pub trait SnapshotStore<T>: Send + Sync {
    /// Load the last saved snapshot, `None` if nothing was saved yet.
    fn load(&self) -> CatalogResult<Option<T>>;

    /// Replace the snapshot (last writer wins).
    fn save(&self, value: &T) -> CatalogResult<()>;
}

/// In-memory snapshot store for tests and ephemeral embedders.
pub struct MemorySnapshot<T> {
    slot: Mutex<Option<T>>,
}

impl<T> MemorySnapshot<T> {
    pub fn open_in_memory() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T> Default for MemorySnapshot<T> {
    fn default() -> Self {
        Self::open_in_memory()
    }
}

impl<T: Clone + Send + Sync> SnapshotStore<T> for MemorySnapshot<T> {
    fn load(&self) -> CatalogResult<Option<T>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, value: &T) -> CatalogResult<()> {
        *self.slot.lock() = Some(value.clone());
        Ok(())
    }
}

/// JSON-file snapshot store.
///
/// Saves write to a sibling temp file and rename over the target, so a
/// crashed save never truncates the previous snapshot.
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize + DeserializeOwned + Send + Sync> SnapshotStore<T> for JsonSnapshotFile {
    fn load(&self) -> CatalogResult<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::storage(format!("read {}: {e}", self.path.display())))?;
        let value = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::storage(format!("decode {}: {e}", self.path.display())))?;
        Ok(Some(value))
    }

    fn save(&self, value: &T) -> CatalogResult<()> {
        let raw = serde_json::to_vec_pretty(value)
            .map_err(|e| CatalogError::storage(format!("encode snapshot: {e}")))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &raw)
            .map_err(|e| CatalogError::storage(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            CatalogError::storage(format!("rename into {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}
