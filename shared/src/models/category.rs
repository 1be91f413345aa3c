//! Category Model

use serde::{Deserialize, Serialize};

/// Product type carried by every category and listing.
///
/// Hierarchy roots own this value; every descendant mirrors its root's
/// type and never edits it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Cake,
    Flowers,
    Combo,
    Teddy,
    Gift,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Cake => "cake",
            ProductType::Flowers => "flowers",
            ProductType::Combo => "combo",
            ProductType::Teddy => "teddy",
            ProductType::Gift => "gift",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    /// URL-safe identifier, unique across the collection
    pub slug: String,
    pub icon_url: Option<String>,
    /// `None` = hierarchy root
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    /// Display flag only, no effect on hierarchy logic
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub product_type: ProductType,
}

fn default_true() -> bool {
    true
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub title: String,
    /// Derived from the title when absent
    pub slug: Option<String>,
    pub icon_url: Option<String>,
    pub parent_id: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    /// Authoritative for roots; ignored when `parent_id` is set (the type
    /// is resolved from the parent's hierarchy root instead)
    pub product_type: ProductType,
}

/// Parent assignment inside an update payload.
///
/// A partial patch must distinguish "leave the parent alone" (field absent)
/// from "detach to root" and "move under another category".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentPatch {
    Root,
    Under(String),
}

/// Icon assignment inside an update payload; same absent/clear/set
/// distinction as [`ParentPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPatch {
    Clear,
    Set(String),
}

/// Update category payload (partial patch)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub icon_url: Option<IconPatch>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    /// Only accepted for categories that are (or become) roots; rejected
    /// otherwise, including alongside [`ParentPatch::Under`]
    pub product_type: Option<ProductType>,
    pub parent: Option<ParentPatch>,
}
