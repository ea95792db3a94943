//! Page assembly
//!
//! Turns the per-element label entries into the final HTML document.

use minijinja::Environment;
use serde_json::Value;

use crate::error::{BoxError, LabelError, LabelResult};

/// Template the generator renders the label document with
pub const BASE_LABEL_TEMPLATE: &str = "labels/base_label.html";

/// Renders a named page template with a structured payload
pub trait PageRenderer: Send + Sync {
    fn render(&self, template: &str, payload: &Value) -> Result<String, BoxError>;
}

/// minijinja renderer with the built-in label templates
///
/// Templates ending in `.html` are auto-escaped.
pub struct HtmlPageRenderer {
    env: Environment<'static>,
}

impl HtmlPageRenderer {
    pub fn new() -> LabelResult<Self> {
        let mut env = Environment::new();
        env.add_template(
            BASE_LABEL_TEMPLATE,
            include_str!("../templates/labels/base_label.html"),
        )
        .map_err(|e| LabelError::Render(Box::new(e)))?;
        Ok(Self { env })
    }

    /// Register an additional (or replacement) page template
    pub fn with_template(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> LabelResult<Self> {
        self.env
            .add_template_owned(name.into(), source.into())
            .map_err(|e| LabelError::Render(Box::new(e)))?;
        Ok(self)
    }
}

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, template: &str, payload: &Value) -> Result<String, BoxError> {
        let template = self.env.get_template(template)?;
        Ok(template.render(payload)?)
    }
}
