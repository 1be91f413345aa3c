//! Category store
//!
//! Owns the category collection behind a single `RwLock`. Mutations are
//! validated against the current snapshot, applied to a working copy,
//! persisted, then swapped into memory — so a failed operation (including
//! a failed save) never leaves partial state behind, and concurrent
//! readers never observe a half-propagated tree.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Category, CategoryCreate, CategoryUpdate, IconPatch, ParentPatch};
use shared::util::new_id;
use shared::{CatalogError, CatalogResult};

use crate::category::tree;
use crate::persist::{CategorySnapshot, MemorySnapshot, SnapshotStore};
use crate::utils::slugify;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SLUG_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};

pub struct CategoryStore {
    persist: Arc<dyn SnapshotStore<CategorySnapshot>>,
    items: RwLock<HashMap<String, Category>>,
}

impl std::fmt::Debug for CategoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryStore")
            .field("count", &self.items.read().len())
            .finish()
    }
}

impl CategoryStore {
    pub fn new(persist: Arc<dyn SnapshotStore<CategorySnapshot>>) -> Self {
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
            for category in snapshot.items {
                items.insert(category.id.clone(), category);
            }
            tracing::info!(count = items.len(), "loaded category snapshot");
        }
        Ok(())
    }

    /// Create a new category.
    ///
    /// With a parent the product type is resolved from the parent's
    /// hierarchy root and any caller-supplied value is ignored; without a
    /// parent the caller's value is authoritative and the category becomes
    /// a root.
    pub fn create(&self, data: CategoryCreate) -> CatalogResult<Category> {
        validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
        validate_optional_text(data.icon_url.as_deref(), "icon_url", MAX_URL_LEN)?;

        let mut items = self.items.write();

        let slug = derive_slug(data.slug.as_deref(), &data.title)?;
        if items.values().any(|c| c.slug == slug) {
            return Err(CatalogError::Duplicate(format!(
                "Category slug '{slug}' already exists"
            )));
        }

        let product_type = match data.parent_id.as_deref() {
            Some(parent_id) => {
                let parent = items.get(parent_id).ok_or_else(|| {
                    CatalogError::NotFound(format!("Parent category {parent_id} not found"))
                })?;
                tree::root_of(&items, &parent.id)
                    .map(|root| root.product_type)
                    .unwrap_or(parent.product_type)
            }
            None => data.product_type,
        };

        let category = Category {
            id: new_id(),
            title: data.title,
            slug,
            icon_url: data.icon_url,
            parent_id: data.parent_id,
            sort_order: data.sort_order.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
            product_type,
        };

        let mut next = items.clone();
        next.insert(category.id.clone(), category.clone());
        self.commit(&mut items, next)?;

        tracing::info!(id = %category.id, slug = %category.slug, "category created");
        Ok(category)
    }

    /// Apply a partial patch.
    ///
    /// Reparenting re-derives the product type from the new parent's root;
    /// a resulting type change propagates to every transitive descendant
    /// within the same commit.
    pub fn update(&self, id: &str, patch: CategoryUpdate) -> CatalogResult<Category> {
        let mut items = self.items.write();

        let existing = items
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(format!("Category {id} not found")))?;
        let prev_type = existing.product_type;
        let mut updated = existing.clone();

        if let Some(title) = patch.title {
            validate_required_text(&title, "title", MAX_NAME_LEN)?;
            updated.title = title;
        }
        if let Some(slug) = patch.slug {
            let slug = derive_slug(Some(&slug), &updated.title)?;
            if items.values().any(|c| c.id != id && c.slug == slug) {
                return Err(CatalogError::Duplicate(format!(
                    "Category slug '{slug}' already exists"
                )));
            }
            updated.slug = slug;
        }
        match patch.icon_url {
            Some(IconPatch::Set(icon_url)) => {
                validate_optional_text(Some(&icon_url), "icon_url", MAX_URL_LEN)?;
                updated.icon_url = Some(icon_url);
            }
            Some(IconPatch::Clear) => updated.icon_url = None,
            None => {}
        }
        if let Some(sort_order) = patch.sort_order {
            updated.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            updated.is_active = is_active;
        }

        match &patch.parent {
            Some(ParentPatch::Under(parent_id)) => {
                if patch.product_type.is_some() {
                    return Err(CatalogError::validation(
                        "product type is derived from the new parent's root",
                    ));
                }
                if parent_id == id {
                    return Err(CatalogError::Cycle(format!(
                        "Category {id} cannot be its own parent"
                    )));
                }
                if tree::is_descendant(&items, id, parent_id) {
                    return Err(CatalogError::Cycle(format!(
                        "Category {parent_id} is a descendant of {id}"
                    )));
                }
                let parent = items.get(parent_id).ok_or_else(|| {
                    CatalogError::NotFound(format!("Parent category {parent_id} not found"))
                })?;
                updated.product_type = tree::root_of(&items, &parent.id)
                    .map(|root| root.product_type)
                    .unwrap_or(parent.product_type);
                updated.parent_id = Some(parent_id.clone());
            }
            Some(ParentPatch::Root) => {
                updated.parent_id = None;
                if let Some(product_type) = patch.product_type {
                    updated.product_type = product_type;
                }
            }
            None => {
                if let Some(product_type) = patch.product_type {
                    if updated.parent_id.is_some() {
                        return Err(CatalogError::validation(
                            "product type of a non-root category is inherited from its root",
                        ));
                    }
                    updated.product_type = product_type;
                }
            }
        }

        let mut next = items.clone();
        next.insert(id.to_string(), updated.clone());

        if updated.product_type != prev_type {
            let descendant_ids: Vec<String> = tree::descendants_of(&next, id)
                .into_iter()
                .map(|c| c.id.clone())
                .collect();
            for descendant_id in &descendant_ids {
                if let Some(descendant) = next.get_mut(descendant_id) {
                    descendant.product_type = updated.product_type;
                }
            }
            tracing::info!(
                id,
                product_type = %updated.product_type,
                descendants = descendant_ids.len(),
                "propagated product type change"
            );
        }

        self.commit(&mut items, next)?;
        tracing::debug!(id, "category updated");
        Ok(updated)
    }

    /// Delete a category. Fails while any child still references it; the
    /// caller must reparent or delete children first (no silent cascade).
    pub fn delete(&self, id: &str) -> CatalogResult<()> {
        let mut items = self.items.write();

        if !items.contains_key(id) {
            return Err(CatalogError::NotFound(format!("Category {id} not found")));
        }
        if items.values().any(|c| c.parent_id.as_deref() == Some(id)) {
            return Err(CatalogError::HasChildren(format!(
                "Category {id} has child categories"
            )));
        }

        let mut next = items.clone();
        next.remove(id);
        self.commit(&mut items, next)?;

        tracing::info!(id, "category deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> CatalogResult<Category> {
        self.items
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Category {id} not found")))
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<Category> {
        self.items
            .read()
            .values()
            .find(|c| c.slug == slug)
            .cloned()
    }

    /// All categories ordered by `sort_order`, path label breaking ties.
    pub fn list(&self) -> Vec<Category> {
        let items = self.items.read();
        let mut out: Vec<Category> = items.values().cloned().collect();
        out.sort_by(|a, b| {
            a.sort_order.cmp(&b.sort_order).then_with(|| {
                tree::path_label(&items, &a.id).cmp(&tree::path_label(&items, &b.id))
            })
        });
        out
    }

    // Save first, swap second: memory only changes when the snapshot write
    // succeeded, which keeps the pre-call state on storage failure.
    fn commit(
        &self,
        items: &mut HashMap<String, Category>,
        next: HashMap<String, Category>,
    ) -> CatalogResult<()> {
        let snapshot = CategorySnapshot {
            items: next.values().cloned().collect(),
        };
        self.persist.save(&snapshot)?;
        *items = next;
        Ok(())
    }
}

fn derive_slug(explicit: Option<&str>, title: &str) -> CatalogResult<String> {
    let source = match explicit {
        Some(s) if !s.trim().is_empty() => s,
        _ => title,
    };
    validate_required_text(source, "slug", MAX_SLUG_LEN)?;
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(CatalogError::validation(
            "slug must contain URL-safe characters",
        ));
    }
    Ok(slug)
}
