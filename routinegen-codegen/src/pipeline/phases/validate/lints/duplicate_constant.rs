//! Lint for names emitted more than once in the same scope.

use std::collections::HashMap;

use routinegen_ir::ConstantsIR;

use super::super::{Lint, lint::location};
use crate::{
    language::NamingConvention,
    pipeline::{Diagnostic, Severity},
};

/// Lint that reports routines mapping to the same constant in one category,
/// and categories mapping to the same container member.
///
/// Names are compared as the target language spells them when a naming
/// convention is given, so `GetBy` and `GetBY` collide for Rust
/// (`GET_BY`) but not for C#. Both entries stay in the IR; emitters render
/// them as-is.
pub struct DuplicateConstantLint {
    severity: Severity,
    naming: Option<NamingConvention>,
}

impl DuplicateConstantLint {
    pub fn new(severity: Severity, naming: Option<NamingConvention>) -> Self {
        Self { severity, naming }
    }

    fn category_name(&self, name: &str) -> String {
        match &self.naming {
            Some(naming) => naming.category_name(name),
            None => name.to_string(),
        }
    }

    fn constant_name(&self, identifier: &str) -> String {
        match &self.naming {
            Some(naming) => naming.constant_name(identifier),
            None => identifier.to_string(),
        }
    }
}

impl Default for DuplicateConstantLint {
    fn default() -> Self {
        Self::new(Severity::Warning, None)
    }
}

impl Lint for DuplicateConstantLint {
    fn name(&self) -> &'static str {
        "duplicate-constant"
    }

    fn description(&self) -> &'static str {
        "Detect routines that derive the same constant name"
    }

    fn check(&self, ir: &ConstantsIR, diagnostics: &mut Vec<Diagnostic>) {
        for set in ir.sets() {
            let mut categories: HashMap<String, &str> = HashMap::new();
            for group in &set.categories {
                let emitted = self.category_name(&group.name);
                if let Some(first) = categories.get(&emitted) {
                    diagnostics.push(
                        Diagnostic::new(
                            self.severity,
                            "validate",
                            format!(
                                "duplicate category '{}' for '{}' (conflicts with '{}')",
                                emitted, group.name, first
                            ),
                        )
                        .at(format!("{}.{}", set.container_name(), group.name)),
                    );
                } else {
                    categories.insert(emitted, &group.name);
                }

                let mut constants: HashMap<String, &str> = HashMap::new();
                for entry in &group.entries {
                    let emitted = self.constant_name(&entry.identifier);
                    if let Some(first) = constants.get(&emitted) {
                        diagnostics.push(
                            Diagnostic::new(
                                self.severity,
                                "validate",
                                format!(
                                    "duplicate constant '{}' for routine '{}' \
                                     (conflicts with '{}')",
                                    emitted, entry.routine, first
                                ),
                            )
                            .at(location(set, group, &entry.identifier)),
                        );
                    } else {
                        constants.insert(emitted, &entry.routine);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use routinegen_core::{to_screaming_snake_case, to_snake_case};

    use super::*;
    use crate::pipeline::phases::validate::lints::lower_functions;

    fn unchanged(name: &str) -> String {
        name.to_string()
    }

    const SNAKE_NAMING: NamingConvention = NamingConvention {
        container_to_name: to_snake_case,
        category_to_name: to_snake_case,
        constant_to_name: to_screaming_snake_case,
        reserved_words: &[],
        escape_reserved: unchanged,
    };

    fn check(lint: DuplicateConstantLint, functions: &[&str]) -> Vec<Diagnostic> {
        let ir = lower_functions(functions);
        let mut diagnostics = Vec::new();
        lint.check(&ir, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let diagnostics = check(
            DuplicateConstantLint::default(),
            &["product_get", "product_list", "order_get"],
        );

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_aliased_routines_warn() {
        let diagnostics = check(
            DuplicateConstantLint::default(),
            &["product_get", "product_product_get"],
        );

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("Functions.Products.Get"));
        assert!(diag.message.contains("'product_product_get'"));
        assert!(diag.message.contains("conflicts with 'product_get'"));
    }

    #[test]
    fn test_case_folding_duplicates() {
        let diagnostics = check(
            DuplicateConstantLint::new(Severity::Error, None),
            &["order_CREATE", "order_create"],
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_same_identifier_in_different_categories() {
        let diagnostics = check(DuplicateConstantLint::default(), &["product_get", "order_get"]);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_names_collide_after_language_casing() {
        let functions = ["product_get_by", "product_get_b_y"];

        // GetBy and GetBY are distinct IR identifiers
        assert!(check(DuplicateConstantLint::default(), &functions).is_empty());

        let diagnostics = check(
            DuplicateConstantLint::new(Severity::Warning, Some(SNAKE_NAMING)),
            &functions,
        );

        assert_eq!(diagnostics.len(), 1);
        let message = &diagnostics[0].message;
        assert!(message.starts_with("duplicate constant 'GET_BY' for routine 'product_get_b_y'"));
        assert!(message.ends_with("(conflicts with 'product_get_by')"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Functions.Products.GetBY"));
    }

    #[test]
    fn test_categories_collide_after_language_casing() {
        let diagnostics = check(
            DuplicateConstantLint::new(Severity::Warning, Some(SNAKE_NAMING)),
            &["lineItem_add", "line-item_add"],
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "duplicate category 'line_items' for 'Line-items' (conflicts with 'LineItems')"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("Functions.Line-items"));
    }
}
