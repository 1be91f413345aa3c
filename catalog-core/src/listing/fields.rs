//! Per-type listing field schema
//!
//! Governs the open `attributes` map on listings. The CRUD layer renders
//! these as form fields; listing validation only consumes the `required`
//! flags.

use serde::Serialize;
use shared::models::ProductType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
    Textarea,
    Number,
}

/// One attribute field of a product type's listing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FieldDef {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            options: Vec::new(),
            required: false,
            default_value: None,
        }
    }

    fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    fn textarea(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Textarea)
    }

    fn number(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    fn select(key: &str, label: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(key, label, FieldKind::Select)
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }
}

/// Field schema for a product type's listing form.
pub fn fields_for(product_type: ProductType) -> Vec<FieldDef> {
    match product_type {
        ProductType::Cake => vec![
            FieldDef::text("flavour", "Cake Flavour").required(),
            FieldDef::select(
                "shape",
                "Shape",
                &["Round", "Square", "Heart", "Rectangle", "Other"],
            )
            .required(),
            FieldDef::text("toppings", "Toppings (optional)"),
            FieldDef::text("netQuantity", "Net Quantity").with_default("1 Cake"),
        ],
        ProductType::Flowers => vec![
            FieldDef::select(
                "flowerType",
                "Flower Type",
                &["Roses", "Lilies", "Carnations", "Tulips", "Mixed", "Other"],
            )
            .required(),
            FieldDef::select(
                "arrangement",
                "Arrangement",
                &["Bouquet", "Box", "Basket", "Bunch"],
            )
            .required(),
            FieldDef::text("color", "Primary Color (optional)"),
            FieldDef::number("stemsCount", "Stems / Qty (optional)"),
            FieldDef::textarea("careNotes", "Care Instructions (optional)"),
        ],
        ProductType::Combo => vec![
            FieldDef::textarea("contents", "Contents (optional)"),
            FieldDef::text("occasion", "Occasion (optional)"),
            FieldDef::text("netQuantity", "Net Quantity").with_default("1 Set"),
        ],
        ProductType::Teddy => vec![
            FieldDef::select("size", "Size", &["Small", "Medium", "Large"]).required(),
            FieldDef::text("color", "Color"),
            FieldDef::text("material", "Material"),
            FieldDef::text("netQuantity", "Net Quantity").with_default("1 Teddy"),
        ],
        ProductType::Gift => vec![
            FieldDef::text("giftType", "Gift Type").required(),
            FieldDef::textarea("contents", "Contents (optional)"),
            FieldDef::text("occasion", "Occasion (optional)"),
            FieldDef::text("netQuantity", "Net Quantity").with_default("1 Unit"),
        ],
    }
}

/// Keys of required fields for a product type.
pub fn required_keys(product_type: ProductType) -> Vec<String> {
    fields_for(product_type)
        .into_iter()
        .filter(|f| f.required)
        .map(|f| f.key)
        .collect()
}
