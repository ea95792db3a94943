//! Sandboxed user templates
//!
//! In template mode the label lines are a user-authored template. It runs
//! in a minijinja environment that starts empty: only an allow-list of
//! filters, tests and functions is registered, output is HTML-escaped and
//! execution is bounded by a fuel budget.
//!
//! The generator only relies on [`SandboxedTemplate::render`], so other
//! engines can be plugged in through [`SandboxedTemplateProvider`].

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, filters, functions};
use serde_json::Value;
use shared::models::{LabelOptions, LinesMode};

use crate::error::BoxError;

/// Entry point holding the label lines
pub const LINES_ENTRY_POINT: &str = "lines";

/// A compiled-on-demand user template
pub trait SandboxedTemplate: Send + Sync {
    /// Render one entry point with the given context
    fn render(&self, entry_point: &str, context: &Value) -> Result<String, BoxError>;
}

/// Hands out sandboxed templates for label options
pub trait SandboxedTemplateProvider: Send + Sync {
    /// Template for the options, `None` if the options are not in template mode
    fn template(&self, options: &LabelOptions) -> Option<Box<dyn SandboxedTemplate>>;
}

/// minijinja based sandbox
#[derive(Debug, Clone, Default)]
pub struct SandboxedTemplates {
    fuel: Option<u64>,
}

impl SandboxedTemplates {
    /// Create a provider; `fuel` bounds template execution (`None` = unlimited)
    pub fn new(fuel: Option<u64>) -> Self {
        Self { fuel }
    }

    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::empty();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_fuel(self.fuel);

        env.add_filter("abs", filters::abs);
        env.add_filter("batch", filters::batch);
        env.add_filter("capitalize", filters::capitalize);
        env.add_filter("default", filters::default);
        env.add_filter("d", filters::default);
        env.add_filter("escape", filters::escape);
        env.add_filter("e", filters::escape);
        env.add_filter("first", filters::first);
        env.add_filter("float", filters::float);
        env.add_filter("int", filters::int);
        env.add_filter("join", filters::join);
        env.add_filter("last", filters::last);
        env.add_filter("length", filters::length);
        env.add_filter("count", filters::length);
        env.add_filter("list", filters::list);
        env.add_filter("lower", filters::lower);
        env.add_filter("replace", filters::replace);
        env.add_filter("reverse", filters::reverse);
        env.add_filter("round", filters::round);
        env.add_filter("safe", filters::safe);
        env.add_filter("slice", filters::slice);
        env.add_filter("sort", filters::sort);
        env.add_filter("string", filters::string);
        env.add_filter("title", filters::title);
        env.add_filter("trim", filters::trim);
        env.add_filter("upper", filters::upper);

        env.add_test("defined", minijinja::tests::is_defined);
        env.add_test("undefined", minijinja::tests::is_undefined);
        env.add_test("none", minijinja::tests::is_none);
        env.add_test("odd", minijinja::tests::is_odd);
        env.add_test("even", minijinja::tests::is_even);
        env.add_test("number", minijinja::tests::is_number);
        env.add_test("string", minijinja::tests::is_string);

        env.add_function("range", functions::range);
        env
    }
}

impl SandboxedTemplateProvider for SandboxedTemplates {
    fn template(&self, options: &LabelOptions) -> Option<Box<dyn SandboxedTemplate>> {
        if options.lines_mode != LinesMode::Template {
            return None;
        }

        let mut sources = BTreeMap::new();
        sources.insert(LINES_ENTRY_POINT.to_string(), options.lines.clone());
        Some(Box::new(SandboxedLines {
            env: self.environment(),
            sources,
        }))
    }
}

/// User template sources bound to a sandboxed environment
///
/// Sources are compiled at render time so syntax errors surface as render
/// errors.
struct SandboxedLines {
    env: Environment<'static>,
    sources: BTreeMap<String, String>,
}

impl SandboxedTemplate for SandboxedLines {
    fn render(&self, entry_point: &str, context: &Value) -> Result<String, BoxError> {
        let source = self
            .sources
            .get(entry_point)
            .ok_or_else(|| format!("unknown template entry point: {}", entry_point))?;
        let out = self.env.render_named_str(entry_point, source, context)?;
        Ok(out)
    }
}
