//! Human readable "<type> <name>" strings

use shared::models::NamedElement;

/// Builds type/name combinations for named elements
pub trait ElementTypeNameGenerator: Send + Sync {
    /// "<type> <name>", optionally followed by the ID
    fn type_name_combination(&self, element: &dyn NamedElement, include_id: bool) -> String;
}

/// Default generator: `"Part R1"` or `"Part R1 (#12)"`
#[derive(Debug, Clone, Default)]
pub struct TypeNameGenerator;

impl ElementTypeNameGenerator for TypeNameGenerator {
    fn type_name_combination(&self, element: &dyn NamedElement, include_id: bool) -> String {
        let mut out = format!("{} {}", element.type_label(), element.name());
        if include_id && let Some(id) = element.id() {
            out.push_str(&format!(" (#{})", id));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{NamedDbElement, Part};

    struct Component {
        base: NamedDbElement,
        kind: &'static str,
    }

    impl NamedElement for Component {
        fn name(&self) -> &str {
            &self.base.name
        }

        fn type_label(&self) -> &str {
            self.kind
        }

        fn id(&self) -> Option<i64> {
            self.base.id
        }
    }

    #[test]
    fn test_combination_without_id() {
        let element = Component {
            base: NamedDbElement::with_id(5, "R1"),
            kind: "Resistor",
        };
        assert_eq!(
            TypeNameGenerator.type_name_combination(&element, false),
            "Resistor R1"
        );
    }

    #[test]
    fn test_combination_with_id() {
        let element = Component {
            base: NamedDbElement::with_id(5, "R1"),
            kind: "Resistor",
        };
        assert_eq!(
            TypeNameGenerator.type_name_combination(&element, true),
            "Resistor R1 (#5)"
        );

        // unsaved elements have no ID to show
        let part = Part::new("C1");
        assert_eq!(TypeNameGenerator.type_name_combination(&part, true), "Part C1");
    }
}
