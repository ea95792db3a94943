//! Barcode generation
//!
//! A label barcode has two faces: the SVG image printed on the label and
//! the raw payload it encodes. Both are derived from the label options
//! (barcode type) and the element (kind and ID).

mod content;
mod svg;

pub use content::BarcodeContentGenerator;
pub use svg::{LINEAR_HEIGHT, encode_linear, linear_svg, qr_svg};

use shared::models::{BarcodeType, LabelOptions};
use tracing::instrument;

use crate::element::LabelElement;
use crate::error::LabelResult;

/// Generates barcode images and payloads for label elements
pub trait BarcodeGenerator: Send + Sync {
    /// SVG image of the barcode, `None` if the options disable barcodes
    fn generate_svg(
        &self,
        options: &LabelOptions,
        element: &dyn LabelElement,
    ) -> LabelResult<Option<String>>;

    /// Payload encoded in the barcode, `None` if the options disable barcodes
    fn content(&self, options: &LabelOptions, element: &dyn LabelElement) -> Option<String>;
}

/// QR codes via `qrcode`, 1D codes via `barcoders`
#[derive(Debug, Clone)]
pub struct StandardBarcodeGenerator {
    content: BarcodeContentGenerator,
}

impl StandardBarcodeGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            content: BarcodeContentGenerator::new(base_url),
        }
    }
}

impl BarcodeGenerator for StandardBarcodeGenerator {
    #[instrument(skip_all, fields(barcode_type = ?options.barcode_type))]
    fn generate_svg(
        &self,
        options: &LabelOptions,
        element: &dyn LabelElement,
    ) -> LabelResult<Option<String>> {
        let Some(content) = self.content(options, element) else {
            return Ok(None);
        };

        let svg = match options.barcode_type {
            BarcodeType::Qr => qr_svg(&content)?,
            other => linear_svg(&encode_linear(other, &content)?, LINEAR_HEIGHT),
        };
        Ok(Some(svg))
    }

    fn content(&self, options: &LabelOptions, element: &dyn LabelElement) -> Option<String> {
        match options.barcode_type {
            BarcodeType::None => None,
            BarcodeType::Qr => Some(self.content.url_content(element)),
            BarcodeType::Code39 | BarcodeType::Code93 | BarcodeType::Code128 => {
                Some(self.content.one_d_content(element))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Part;

    fn part() -> Part {
        let mut part = Part::new("R1");
        part.base.id = Some(42);
        part
    }

    #[test]
    fn test_no_barcode() {
        let generator = StandardBarcodeGenerator::new("http://localhost:8000");
        let options = LabelOptions::fixed("{{name}}");

        assert_eq!(generator.content(&options, &part()), None);
        assert_eq!(generator.generate_svg(&options, &part()).unwrap(), None);
    }

    #[test]
    fn test_qr_barcode() {
        let generator = StandardBarcodeGenerator::new("http://localhost:8000");
        let options = LabelOptions::fixed("").with_barcode(BarcodeType::Qr);

        assert_eq!(
            generator.content(&options, &part()).as_deref(),
            Some("http://localhost:8000/scan/part/42")
        );
        let svg = generator.generate_svg(&options, &part()).unwrap().unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_code128_barcode() {
        let generator = StandardBarcodeGenerator::new("http://localhost:8000");
        let options = LabelOptions::fixed("").with_barcode(BarcodeType::Code128);

        assert_eq!(generator.content(&options, &part()).as_deref(), Some("P0042"));
        let svg = generator.generate_svg(&options, &part()).unwrap().unwrap();
        assert!(svg.contains("<rect"));
    }
}
