//! Placeholder substitution for fixed label lines
//!
//! Fixed lines are HTML with `{{ key }}` placeholders. Each placeholder is
//! replaced by the element's value for that key (HTML-escaped). Unknown
//! placeholders stay in the output as written so typos remain visible.

use std::fmt::Write;

use minijinja::HtmlEscape;

use crate::element::LabelElement;

/// Replaces placeholders in a line template with element values
pub trait LabelTextReplacer: Send + Sync {
    fn replace(&self, lines: &str, element: &dyn LabelElement) -> String;
}

/// Default `{{ key }}` replacer
#[derive(Debug, Clone, Default)]
pub struct PlaceholderReplacer;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

impl LabelTextReplacer for PlaceholderReplacer {
    fn replace(&self, lines: &str, element: &dyn LabelElement) -> String {
        let mut out = String::with_capacity(lines.len());
        let mut rest = lines;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };

            out.push_str(&rest[..start]);
            let key = after_open[..end].trim().to_ascii_lowercase();
            match element.placeholder(&key) {
                Some(value) => {
                    let _ = write!(out, "{}", HtmlEscape(&value));
                }
                None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
            }
            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{LabelSupportedElement, Part};

    fn part(name: &str) -> Part {
        let mut part = Part::new(name);
        part.base.id = Some(3);
        part
    }

    #[test]
    fn test_replace_simple() {
        let out = PlaceholderReplacer.replace("{{name}}", &part("Resistor 10k"));
        assert_eq!(out, "Resistor 10k");
    }

    #[test]
    fn test_replace_multiple_with_whitespace_and_case() {
        let out = PlaceholderReplacer.replace("<b>{{ NAME }}</b><br>ID: {{id}}", &part("C1"));
        assert_eq!(out, "<b>C1</b><br>ID: 3");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let out = PlaceholderReplacer.replace("{{ nope }} {{name}}", &part("C1"));
        assert_eq!(out, "{{ nope }} C1");
    }

    #[test]
    fn test_unterminated_placeholder() {
        let out = PlaceholderReplacer.replace("{{name}} {{name", &part("C1"));
        assert_eq!(out, "C1 {{name");
    }

    #[test]
    fn test_values_are_escaped() {
        let out = PlaceholderReplacer.replace("{{name}}", &part("<R&D>"));
        assert_eq!(out, "&lt;R&amp;D&gt;");

        let out = PlaceholderReplacer.replace(r#"<a title="{{name}}">"#, &part(r#"2" drive"#));
        assert_eq!(out, r#"<a title="2&quot; drive">"#);
    }

    #[test]
    fn test_no_placeholders() {
        let element = part("C1");
        assert_eq!(LabelElement::kind(&element), LabelSupportedElement::Part);
        assert_eq!(PlaceholderReplacer.replace("plain text", &element), "plain text");
        assert_eq!(PlaceholderReplacer.replace("", &element), "");
    }
}
