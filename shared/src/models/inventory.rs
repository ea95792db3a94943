//! Labelable inventory elements

use serde::{Deserialize, Deserializer, Serialize};

use super::label_options::LabelSupportedElement;
use super::part::{Part, PartLot};
use super::structural::{StructuralElement, StructuralKind};

/// Any element a label can be printed for
///
/// Serialized with a `type` tag so mixed lists can be read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryElement {
    Part(Part),
    PartLot(PartLot),
    /// Always read as a storage location, whatever `kind` says
    #[serde(deserialize_with = "storage_location")]
    StorageLocation(StructuralElement),
}

fn storage_location<'de, D>(deserializer: D) -> Result<StructuralElement, D::Error>
where
    D: Deserializer<'de>,
{
    let mut location = StructuralElement::deserialize(deserializer)?;
    location.kind = StructuralKind::StorageLocation;
    Ok(location)
}

impl InventoryElement {
    pub fn kind(&self) -> LabelSupportedElement {
        match self {
            Self::Part(_) => LabelSupportedElement::Part,
            Self::PartLot(_) => LabelSupportedElement::PartLot,
            Self::StorageLocation(_) => LabelSupportedElement::StorageLocation,
        }
    }
}

impl From<Part> for InventoryElement {
    fn from(part: Part) -> Self {
        Self::Part(part)
    }
}

impl From<PartLot> for InventoryElement {
    fn from(lot: PartLot) -> Self {
        Self::PartLot(lot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_list() {
        let json = r#"[
            {"type": "part", "id": 1, "name": "R1"},
            {"type": "storage_location", "id": 2, "name": "Drawer", "kind": "storage_location"},
            {"type": "part_lot", "id": 3, "amount": 5.0, "part": {"id": 1, "name": "R1"}}
        ]"#;
        let elements: Vec<InventoryElement> = serde_json::from_str(json).unwrap();

        let kinds: Vec<_> = elements.iter().map(InventoryElement::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LabelSupportedElement::Part,
                LabelSupportedElement::StorageLocation,
                LabelSupportedElement::PartLot,
            ]
        );
        match &elements[2] {
            InventoryElement::PartLot(lot) => assert_eq!(lot.part.base.name, "R1"),
            other => panic!("unexpected element: {:?}", other),
        }
    }

    #[test]
    fn test_storage_location_kind_is_implied() {
        let json = r#"[
            {"type": "storage_location", "id": 4, "name": "Drawer 1"},
            {"type": "storage_location", "id": 5, "name": "Shelf", "kind": "category"}
        ]"#;
        let elements: Vec<InventoryElement> = serde_json::from_str(json).unwrap();

        for element in &elements {
            match element {
                InventoryElement::StorageLocation(location) => {
                    assert_eq!(location.kind, StructuralKind::StorageLocation);
                }
                other => panic!("unexpected element: {:?}", other),
            }
        }
    }
}
