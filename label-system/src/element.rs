//! Elements labels can be generated for
//!
//! [`LabelElement`] is what the generator and its collaborators see of a
//! domain object: its kind and ID (for barcodes), its placeholder values
//! (for fixed lines), its serialized form (for templates) and, optionally,
//! its [`NamedElement`] capability (for the document title).

use serde_json::Value;
use shared::models::{
    InventoryElement, LabelSupportedElement, NamedDbElement, NamedElement, Part, PartLot,
    PATH_DELIMITER, StructuralElement, Timestamps,
};
use shared::util::{format_millis, format_millis_date};

/// A domain element that can be put on a label
pub trait LabelElement: Send + Sync {
    /// Kind of element, selects barcode prefixes and scan URLs
    fn kind(&self) -> LabelSupportedElement;

    /// Database ID, `None` if not persisted
    fn element_id(&self) -> Option<i64>;

    /// Name/type capability, if this element has one
    fn as_named(&self) -> Option<&dyn NamedElement> {
        None
    }

    /// Value of a placeholder (lowercase key), `None` if unknown
    fn placeholder(&self, key: &str) -> Option<String>;

    /// Serialized form handed to templates as `element`
    fn to_context(&self) -> serde_json::Result<Value>;
}

fn id_string(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn timestamp_placeholder(timestamps: &Timestamps, key: &str) -> Option<String> {
    match key {
        "last_modified" => Some(timestamps.last_modified.map(format_millis).unwrap_or_default()),
        "creation_date" => Some(timestamps.added_date.map(format_millis).unwrap_or_default()),
        _ => None,
    }
}

fn named_placeholder(base: &NamedDbElement, type_label: &str, key: &str) -> Option<String> {
    match key {
        "id" => Some(id_string(base.id)),
        "type" => Some(type_label.to_string()),
        "name" => Some(base.name.clone()),
        _ => timestamp_placeholder(&base.timestamps, key),
    }
}

fn structural_name(element: Option<&StructuralElement>) -> String {
    element.map(|e| e.base.name.clone()).unwrap_or_default()
}

fn structural_path(element: Option<&StructuralElement>) -> String {
    element
        .map(|e| e.full_path(PATH_DELIMITER))
        .unwrap_or_default()
}

/// Format an amount without a trailing `.0`
fn format_amount(value: f64) -> String {
    format!("{}", value)
}

impl LabelElement for Part {
    fn kind(&self) -> LabelSupportedElement {
        LabelSupportedElement::Part
    }

    fn element_id(&self) -> Option<i64> {
        self.base.id
    }

    fn as_named(&self) -> Option<&dyn NamedElement> {
        Some(self)
    }

    fn placeholder(&self, key: &str) -> Option<String> {
        let value = match key {
            "description" => self.description.clone(),
            "comment" => self.comment.clone(),
            "category" => structural_name(self.category.as_ref()),
            "category_full" => structural_path(self.category.as_ref()),
            "footprint" => structural_name(self.footprint.as_ref()),
            "footprint_full" => structural_path(self.footprint.as_ref()),
            "manufacturer" => structural_name(self.manufacturer.as_ref()),
            "mpn" => self.manufacturer_product_number.clone(),
            "ipn" => self.ipn.clone().unwrap_or_default(),
            "tags" => self.tags.join(", "),
            "min_amount" => format_amount(self.min_amount),
            "unit" => self.unit.clone().unwrap_or_default(),
            "mass" => self.mass.map(|m| format!("{} g", m)).unwrap_or_default(),
            "supplier" => self
                .preferred_orderdetail()
                .map(|o| o.supplier_name().to_string())
                .unwrap_or_default(),
            "supplier_partnr" => self
                .preferred_orderdetail()
                .map(|o| o.supplierpartnr.clone())
                .unwrap_or_default(),
            _ => return named_placeholder(&self.base, self.type_label(), key),
        };
        Some(value)
    }

    fn to_context(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl LabelElement for PartLot {
    fn kind(&self) -> LabelSupportedElement {
        LabelSupportedElement::PartLot
    }

    fn element_id(&self) -> Option<i64> {
        self.id
    }

    fn placeholder(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" | "lot_id" => id_string(self.id),
            "type" => "Part lot".to_string(),
            "lot_name" => self.description.clone(),
            "lot_comment" => self.comment.clone(),
            "expiration_date" => self
                .expiration_date
                .map(format_millis_date)
                .unwrap_or_default(),
            "amount" if self.instock_unknown => "?".to_string(),
            "amount" => format_amount(self.amount),
            "location" => structural_name(self.storage_location.as_ref()),
            "location_full" => structural_path(self.storage_location.as_ref()),
            _ => {
                return timestamp_placeholder(&self.timestamps, key)
                    .or_else(|| self.part.placeholder(key));
            }
        };
        Some(value)
    }

    fn to_context(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Structural elements are labeled as storage locations
impl LabelElement for StructuralElement {
    fn kind(&self) -> LabelSupportedElement {
        LabelSupportedElement::StorageLocation
    }

    fn element_id(&self) -> Option<i64> {
        self.base.id
    }

    fn as_named(&self) -> Option<&dyn NamedElement> {
        Some(self)
    }

    fn placeholder(&self, key: &str) -> Option<String> {
        let value = match key {
            "comment" => self.comment.clone(),
            "parent" => self.parent().unwrap_or_default().to_string(),
            "full_path" => self.full_path(PATH_DELIMITER),
            _ => return named_placeholder(&self.base, self.type_label(), key),
        };
        Some(value)
    }

    fn to_context(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl LabelElement for InventoryElement {
    fn kind(&self) -> LabelSupportedElement {
        InventoryElement::kind(self)
    }

    fn element_id(&self) -> Option<i64> {
        match self {
            Self::Part(part) => part.element_id(),
            Self::PartLot(lot) => lot.element_id(),
            Self::StorageLocation(location) => location.element_id(),
        }
    }

    fn as_named(&self) -> Option<&dyn NamedElement> {
        match self {
            Self::Part(part) => part.as_named(),
            Self::PartLot(lot) => lot.as_named(),
            Self::StorageLocation(location) => location.as_named(),
        }
    }

    fn placeholder(&self, key: &str) -> Option<String> {
        match self {
            Self::Part(part) => part.placeholder(key),
            Self::PartLot(lot) => lot.placeholder(key),
            Self::StorageLocation(location) => location.placeholder(key),
        }
    }

    fn to_context(&self) -> serde_json::Result<Value> {
        match self {
            Self::Part(part) => part.to_context(),
            Self::PartLot(lot) => lot.to_context(),
            Self::StorageLocation(location) => location.to_context(),
        }
    }
}
