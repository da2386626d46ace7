//! Lint for routines that derive an empty constant name.

use routinegen_ir::ConstantsIR;

use super::super::{
    Lint,
    lint::{entries, location},
};
use crate::pipeline::Diagnostic;

/// Lint that warns when nothing is left of a routine name after removing
/// its category prefix (e.g., `product_`).
pub struct EmptyIdentifierLint;

impl Lint for EmptyIdentifierLint {
    fn name(&self) -> &'static str {
        "empty-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect routines whose derived constant name is empty"
    }

    fn check(&self, ir: &ConstantsIR, diagnostics: &mut Vec<Diagnostic>) {
        for (set, group, entry) in entries(ir) {
            if entry.identifier.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("routine '{}' derives an empty constant name", entry.routine),
                    )
                    .at(location(set, group, "")),
                );
            }
        }
    }
}
