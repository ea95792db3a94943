//! Label Options Model

use serde::{Deserialize, Serialize};

/// How the text lines of a label are produced
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinesMode {
    /// Literal lines with `{{ placeholder }}` substitution
    #[default]
    #[serde(alias = "html")]
    Fixed,
    /// User-authored template, executed in a sandbox
    #[serde(alias = "twig")]
    Template,
}

/// Barcode printed on the label
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeType {
    #[default]
    None,
    Qr,
    Code39,
    Code93,
    Code128,
}

impl BarcodeType {
    /// 2D codes carry a scan URL and sit beside the lines, 1D codes sit below
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Qr)
    }
}

/// Element kind a label layout is made for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LabelSupportedElement {
    #[default]
    Part,
    PartLot,
    StorageLocation,
}

impl LabelSupportedElement {
    /// Type segment of scan URLs
    pub fn scan_type(&self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::PartLot => "lot",
            Self::StorageLocation => "location",
        }
    }

    /// Prefix of 1D barcode contents
    pub fn barcode_prefix(&self) -> char {
        match self {
            Self::Part => 'P',
            Self::PartLot => 'L',
            Self::StorageLocation => 'S',
        }
    }
}

/// Label options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelOptions {
    /// Page width in mm
    #[serde(default = "default_width")]
    pub width: f32,
    /// Page height in mm
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub barcode_type: BarcodeType,
    #[serde(default)]
    pub supported_element: LabelSupportedElement,
    #[serde(default)]
    pub additional_css: String,
    #[serde(default)]
    pub lines_mode: LinesMode,
    /// Fixed line template or sandboxed template source, depending on `lines_mode`
    #[serde(default)]
    pub lines: String,
}

fn default_width() -> f32 {
    50.0
}

fn default_height() -> f32 {
    30.0
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            barcode_type: BarcodeType::default(),
            supported_element: LabelSupportedElement::default(),
            additional_css: String::new(),
            lines_mode: LinesMode::default(),
            lines: String::new(),
        }
    }
}

impl LabelOptions {
    /// Options rendering fixed lines
    pub fn fixed(lines: impl Into<String>) -> Self {
        Self {
            lines: lines.into(),
            ..Default::default()
        }
    }

    /// Options rendering a sandboxed template
    pub fn template(source: impl Into<String>) -> Self {
        Self {
            lines_mode: LinesMode::Template,
            lines: source.into(),
            ..Default::default()
        }
    }

    pub fn with_barcode(mut self, barcode_type: BarcodeType) -> Self {
        self.barcode_type = barcode_type;
        self
    }

    pub fn with_supported_element(mut self, kind: LabelSupportedElement) -> Self {
        self.supported_element = kind;
        self
    }

    /// Whether these options are made for the given element kind
    pub fn supports(&self, kind: LabelSupportedElement) -> bool {
        self.supported_element == kind
    }
}
