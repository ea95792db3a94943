//! # label-system
//!
//! Printable HTML labels for inventory elements (parts, part lots, storage
//! locations).
//!
//! ## Scope
//!
//! This crate handles HOW a label document is assembled:
//! - Text lines from `{{ placeholder }}` substitution or a sandboxed user template
//! - Barcode images (QR, Code 39/93/128) and their payloads
//! - Page layout through a named HTML template
//!
//! Each step is a trait ([`LabelTextReplacer`], [`SandboxedTemplateProvider`],
//! [`BarcodeGenerator`], [`PageRenderer`], ...) with a default implementation,
//! so front ends can swap any of them.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use label_system::{LabelConfig, LabelHtmlGenerator, StaticIdentity};
//! use shared::models::{BarcodeType, LabelOptions, Part};
//!
//! let config = LabelConfig::from_env()?;
//! let generator = LabelHtmlGenerator::standard(&config, Arc::new(StaticIdentity::anonymous()))?;
//!
//! let options = LabelOptions::fixed("<b>{{name}}</b><br>{{category}}")
//!     .with_barcode(BarcodeType::Qr);
//! let html = generator.render(&options, &[Part::new("R 10k")])?;
//! ```

mod barcode;
mod config;
mod element;
mod error;
mod generator;
mod identity;
mod page;
mod replacer;
mod sandbox;
mod type_name;

// Re-exports
pub use barcode::{BarcodeContentGenerator, BarcodeGenerator, StandardBarcodeGenerator};
pub use config::LabelConfig;
pub use element::LabelElement;
pub use error::{BoxError, LabelError, LabelResult};
pub use generator::{FALLBACK_TITLE, LabelEntry, LabelHtmlGenerator};
pub use identity::{IdentityProvider, StaticIdentity};
pub use page::{BASE_LABEL_TEMPLATE, HtmlPageRenderer, PageRenderer};
pub use replacer::{LabelTextReplacer, PlaceholderReplacer};
pub use sandbox::{
    LINES_ENTRY_POINT, SandboxedTemplate, SandboxedTemplateProvider, SandboxedTemplates,
};
pub use type_name::{ElementTypeNameGenerator, TypeNameGenerator};
