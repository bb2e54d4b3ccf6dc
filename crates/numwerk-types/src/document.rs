use serde::{Deserialize, Serialize};

/// Document kinds the save pipeline distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Part,
    Assembly,
    Drawing,
}

impl DocumentKind {
    /// Default filename extension for documents of this kind.
    pub fn default_extension(self) -> &'static str {
        match self {
            DocumentKind::Part => "ipt",
            DocumentKind::Assembly => "iam",
            DocumentKind::Drawing => "idw",
        }
    }
}

/// Where a document comes from, driving folder and filename rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartCategory {
    /// Manufactured in-house.
    MakePart,
    /// Supplied by the customer; referenced, not manufactured.
    CustomerPart,
    /// Purchased from a named vendor.
    BuyPart,
}

impl PartCategory {
    /// BOM structure the host should record for this category.
    pub fn bom_structure(self) -> BomStructure {
        match self {
            PartCategory::MakePart => BomStructure::Normal,
            PartCategory::CustomerPart => BomStructure::Reference,
            PartCategory::BuyPart => BomStructure::Purchased,
        }
    }
}

/// BOM structure written back to the host document on acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BomStructure {
    Normal,
    Reference,
    Purchased,
}

/// A named document property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyValue {
    Text { value: String },
    Bool { value: bool },
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text {
            value: value.into(),
        }
    }

    pub fn bool(value: bool) -> Self {
        PropertyValue::Bool { value }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text { value } => Some(value),
            PropertyValue::Bool { .. } => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool { value } => Some(*value),
            PropertyValue::Text { .. } => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            PropertyValue::Text { value } => Some(value),
            PropertyValue::Bool { .. } => None,
        }
    }
}

/// Named document properties read and written by the save pipeline.
/// Created on first write, overwritten afterwards.
pub mod properties {
    /// Vendor of a bought part.
    pub const VENDOR: &str = "Vendor";
    /// Part number following the project numbering convention.
    pub const PART_NUMBER: &str = "Part Number";
    /// Free-text description, becomes part of the filename.
    pub const DESCRIPTION: &str = "Description";
    /// Name of the owning project.
    pub const PROJECT: &str = "Project";
    /// Reduced stock dimension string, e.g. `"30x20x10"`.
    pub const STOCK_DIMENSIONS: &str = "Halbzeug";
    /// Recompute the stock string on every save.
    pub const REFRESH_STOCK: &str = "HalbzeugNeuBerechnen";
    /// Turned (lathe) part; stock reports diameter × length.
    pub const IS_ROUND: &str = "Drehteil";
}
