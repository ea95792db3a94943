//! Structural (tree-organised) elements
//!
//! Categories, footprints, manufacturers, storage locations and suppliers
//! all share the same shape: a named node with an optional parent chain.

use serde::{Deserialize, Serialize};

use super::base::{NamedDbElement, NamedElement};

/// Kind of structural element
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    #[default]
    Category,
    Footprint,
    Manufacturer,
    StorageLocation,
    Supplier,
}

impl StructuralKind {
    /// Human readable type label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Footprint => "Footprint",
            Self::Manufacturer => "Manufacturer",
            Self::StorageLocation => "Storage location",
            Self::Supplier => "Supplier",
        }
    }
}

/// Default delimiter between path segments
pub const PATH_DELIMITER: &str = " → ";

/// Structural element entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StructuralElement {
    #[serde(flatten)]
    pub base: NamedDbElement,
    #[serde(default)]
    pub kind: StructuralKind,
    #[serde(default)]
    pub comment: String,
    /// Names of the ancestors, root first
    #[serde(default)]
    pub parent_path: Vec<String>,
}

impl StructuralElement {
    pub fn new(kind: StructuralKind, name: impl Into<String>) -> Self {
        Self {
            base: NamedDbElement::new(name),
            kind,
            ..Default::default()
        }
    }

    /// Set the ancestor chain (root first)
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_path = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the direct parent, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent_path.last().map(String::as_str)
    }

    /// Full path from the root down to this element
    pub fn full_path(&self, delimiter: &str) -> String {
        self.parent_path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.base.name.as_str()))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl NamedElement for StructuralElement {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn type_label(&self) -> &str {
        self.kind.label()
    }

    fn id(&self) -> Option<i64> {
        self.base.id
    }
}
