//! Barcode image encoding (SVG)

use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::code93::Code93;
use qrcode::QrCode;
use qrcode::render::svg;
use shared::models::BarcodeType;

use crate::error::{LabelError, LabelResult};

/// Minimum edge length of QR code images (px)
const QR_MIN_SIZE: u32 = 150;
/// Height of 1D barcode images (px)
pub const LINEAR_HEIGHT: u32 = 60;
/// Code 128 character set B selector
const CODE128_SET_B: char = 'Ɓ';

/// Render a QR code as SVG
pub fn qr_svg(content: &str) -> LabelResult<String> {
    let code = QrCode::new(content.as_bytes()).map_err(|e| LabelError::Barcode(e.to_string()))?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .quiet_zone(false)
        .build())
}

/// Encode 1D barcode modules (1 = bar, 0 = space)
pub fn encode_linear(barcode_type: BarcodeType, content: &str) -> LabelResult<Vec<u8>> {
    let encoded = match barcode_type {
        BarcodeType::Code39 => Code39::new(content).map(|b| b.encode()),
        BarcodeType::Code93 => Code93::new(content).map(|b| b.encode()),
        BarcodeType::Code128 => {
            Code128::new(format!("{}{}", CODE128_SET_B, content)).map(|b| b.encode())
        }
        other => {
            return Err(LabelError::Barcode(format!(
                "{:?} is not a 1D barcode type",
                other
            )));
        }
    };
    encoded.map_err(|e| LabelError::Barcode(format!("{:?}: {}", barcode_type, e)))
}

/// Render encoded 1D modules as SVG, one unit per module
///
/// Adjacent bars are merged into one rectangle.
pub fn linear_svg(modules: &[u8], height: u32) -> String {
    let width = modules.len();
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="none" shape-rendering="crispEdges">"#,
        w = width,
        h = height
    );

    let mut x = 0;
    while x < width {
        if modules[x] == 0 {
            x += 1;
            continue;
        }
        let start = x;
        while x < width && modules[x] != 0 {
            x += 1;
        }
        out.push_str(&format!(
            r##"<rect x="{}" y="0" width="{}" height="{}" fill="#000000"/>"##,
            start,
            x - start,
            height
        ));
    }

    out.push_str("</svg>");
    out
}
