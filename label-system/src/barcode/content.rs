//! Barcode payloads
//!
//! 2D codes encode a scan URL (`<base>/scan/<type>/<id>`), 1D codes a short
//! ID with a one letter type prefix (`P0042`). Unsaved elements use ID 0.

use crate::element::LabelElement;

/// Builds the string encoded into a barcode
#[derive(Debug, Clone)]
pub struct BarcodeContentGenerator {
    base_url: String,
}

impl BarcodeContentGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Scan URL for QR codes
    pub fn url_content(&self, element: &dyn LabelElement) -> String {
        format!(
            "{}/scan/{}/{}",
            self.base_url,
            element.kind().scan_type(),
            element.element_id().unwrap_or(0)
        )
    }

    /// Short ID for 1D barcodes
    pub fn one_d_content(&self, element: &dyn LabelElement) -> String {
        format!(
            "{}{:04}",
            element.kind().barcode_prefix(),
            element.element_id().unwrap_or(0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Part, PartLot, StructuralElement, StructuralKind};

    #[test]
    fn test_url_content() {
        let generator = BarcodeContentGenerator::new("https://parts.example.com/");
        let mut part = Part::new("R1");
        part.base.id = Some(12);

        assert_eq!(
            generator.url_content(&part),
            "https://parts.example.com/scan/part/12"
        );

        let lot = PartLot::new(part, 1.0);
        assert_eq!(
            generator.url_content(&lot),
            "https://parts.example.com/scan/lot/0"
        );
    }

    #[test]
    fn test_one_d_content() {
        let generator = BarcodeContentGenerator::new("http://localhost");
        let mut location = StructuralElement::new(StructuralKind::StorageLocation, "Box");
        location.base.id = Some(7);
        assert_eq!(generator.one_d_content(&location), "S0007");

        let mut part = Part::new("R1");
        part.base.id = Some(123456);
        assert_eq!(generator.one_d_content(&part), "P123456");
    }
}
