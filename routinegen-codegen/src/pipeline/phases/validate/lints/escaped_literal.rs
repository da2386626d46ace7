//! Lint for routine names that need escaping inside string literals.

use routinegen_ir::ConstantsIR;

use super::super::{
    Lint,
    lint::{entries, location},
};
use crate::pipeline::Diagnostic;

/// Lint that warns about routine names containing quotes, backslashes or
/// control characters. Emitters escape them, but such names are usually a
/// mistake in the database.
pub struct EscapedLiteralLint;

fn needs_escaping(c: char) -> bool {
    c == '"' || c == '\\' || c.is_control()
}

impl Lint for EscapedLiteralLint {
    fn name(&self) -> &'static str {
        "escaped-literal"
    }

    fn description(&self) -> &'static str {
        "Detect routine names that must be escaped in string literals"
    }

    fn check(&self, ir: &ConstantsIR, diagnostics: &mut Vec<Diagnostic>) {
        for (set, group, entry) in entries(ir) {
            if entry.routine.chars().any(needs_escaping) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "routine {:?} contains characters that are escaped in the output",
                            entry.routine
                        ),
                    )
                    .at(location(set, group, &entry.identifier)),
                );
            }
        }
    }
}
