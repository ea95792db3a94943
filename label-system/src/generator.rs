//! Label HTML generator
//!
//! Produces one HTML document with one label per element. For every element
//! the text lines are resolved (placeholder substitution or the sandboxed
//! user template), a barcode image and its payload are generated, and the
//! collected entries are handed to the page renderer.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use shared::models::{LabelOptions, LinesMode};
use tracing::{debug, instrument, warn};

use crate::barcode::{BarcodeGenerator, StandardBarcodeGenerator};
use crate::config::LabelConfig;
use crate::element::LabelElement;
use crate::error::{LabelError, LabelResult};
use crate::identity::IdentityProvider;
use crate::page::{BASE_LABEL_TEMPLATE, HtmlPageRenderer, PageRenderer};
use crate::replacer::{LabelTextReplacer, PlaceholderReplacer};
use crate::sandbox::{LINES_ENTRY_POINT, SandboxedTemplateProvider, SandboxedTemplates};
use crate::type_name::{ElementTypeNameGenerator, TypeNameGenerator};

/// Title used when the first element has no name
pub const FALLBACK_TITLE: &str = "Part-DB label";

/// One label of the document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabelEntry {
    /// 1-based position in the input
    pub page: usize,
    pub element: Value,
    pub lines: String,
    pub barcode: Option<String>,
    pub barcode_content: Option<String>,
}

/// Collaborators of the generator
///
/// Everything the generator talks to is injected, so the generator itself
/// holds no mutable state and can serve concurrent calls.
pub struct LabelHtmlGenerator {
    type_names: Arc<dyn ElementTypeNameGenerator>,
    replacer: Arc<dyn LabelTextReplacer>,
    pages: Arc<dyn PageRenderer>,
    barcodes: Arc<dyn BarcodeGenerator>,
    sandbox: Arc<dyn SandboxedTemplateProvider>,
    identity: Arc<dyn IdentityProvider>,
    install_title: String,
}

impl LabelHtmlGenerator {
    pub fn new(
        type_names: Arc<dyn ElementTypeNameGenerator>,
        replacer: Arc<dyn LabelTextReplacer>,
        pages: Arc<dyn PageRenderer>,
        barcodes: Arc<dyn BarcodeGenerator>,
        sandbox: Arc<dyn SandboxedTemplateProvider>,
        identity: Arc<dyn IdentityProvider>,
        install_title: impl Into<String>,
    ) -> Self {
        Self {
            type_names,
            replacer,
            pages,
            barcodes,
            sandbox,
            identity,
            install_title: install_title.into(),
        }
    }

    /// Generator wired with the default collaborators
    pub fn standard(
        config: &LabelConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> LabelResult<Self> {
        Ok(Self::new(
            Arc::new(TypeNameGenerator),
            Arc::new(PlaceholderReplacer),
            Arc::new(HtmlPageRenderer::new()?),
            Arc::new(StandardBarcodeGenerator::new(config.base_url.clone())),
            Arc::new(SandboxedTemplates::new(config.sandbox_fuel)),
            identity,
            config.install_title.clone(),
        ))
    }

    /// Render the label document for `elements`
    ///
    /// Fails with [`LabelError::InvalidInput`] if `elements` is empty and
    /// with [`LabelError::TemplateExecution`] if a sandboxed template fails;
    /// no partial document is produced in either case.
    #[instrument(skip_all, fields(elements = elements.len(), lines_mode = ?options.lines_mode))]
    pub fn render<E: LabelElement>(
        &self,
        options: &LabelOptions,
        elements: &[E],
    ) -> LabelResult<String> {
        let entries = self.render_entries(options, elements)?;

        let title = self.title(&elements[0]);
        debug!(title = %title, "Rendering label page");

        let payload = json!({
            "meta_title": title,
            "elements": entries,
            "options": options,
            "barcode_2d": options.barcode_type.is_2d(),
        });

        self.pages
            .render(BASE_LABEL_TEMPLATE, &payload)
            .map_err(LabelError::Render)
    }

    /// Resolve lines and barcodes for every element, in input order
    pub fn render_entries<E: LabelElement>(
        &self,
        options: &LabelOptions,
        elements: &[E],
    ) -> LabelResult<Vec<LabelEntry>> {
        if elements.is_empty() {
            return Err(LabelError::InvalidInput(
                "elements must not be empty".to_string(),
            ));
        }

        // Resolved once, shared by all elements
        let (sandboxed, user) = match options.lines_mode {
            LinesMode::Template => (
                self.sandbox.template(options),
                self.identity.current_identity(),
            ),
            LinesMode::Fixed => (None, None),
        };

        let mut entries = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let page = index + 1;
            let element_value = element.to_context()?;

            let lines = match &sandboxed {
                Some(template) => {
                    let context = json!({
                        "element": element_value,
                        "page": page,
                        "user": user,
                        "install_title": self.install_title,
                    });
                    template
                        .render(LINES_ENTRY_POINT, &context)
                        .map_err(|e| {
                            warn!(page, error = %e, "Label template failed");
                            LabelError::TemplateExecution(e)
                        })?
                }
                None => self.replacer.replace(&options.lines, element),
            };

            let barcode = self.barcodes.generate_svg(options, element)?;
            let barcode_content = self.barcodes.content(options, element);

            debug!(page, has_barcode = barcode.is_some(), "Label resolved");
            entries.push(LabelEntry {
                page,
                element: element_value,
                lines,
                barcode,
                barcode_content,
            });
        }

        Ok(entries)
    }

    /// Document title derived from the first element
    fn title(&self, element: &dyn LabelElement) -> String {
        match element.as_named() {
            Some(named) => self.type_names.type_name_combination(named, false),
            None => FALLBACK_TITLE.to_string(),
        }
    }
}
