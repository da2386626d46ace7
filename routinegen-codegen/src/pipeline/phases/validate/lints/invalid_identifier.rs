//! Lint for constant names that are not valid identifiers.

use routinegen_core::is_identifier;
use routinegen_ir::ConstantsIR;

use super::super::{
    Lint,
    lint::{entries, location},
};
use crate::pipeline::Diagnostic;

/// Lint that warns when a category or constant name is not a plain
/// identifier (e.g., it starts with a digit or contains `-`).
///
/// The C# and Rust emitters write a rewritten name (`2fa` -> `_2fa`) and the
/// TypeScript emitter quotes the key, so the warning flags a name that differs
/// from what the routine prefix suggests.
pub struct InvalidIdentifierLint;

impl Lint for InvalidIdentifierLint {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect category and constant names that are not valid identifiers"
    }

    fn check(&self, ir: &ConstantsIR, diagnostics: &mut Vec<Diagnostic>) {
        for set in ir.sets() {
            for group in &set.categories {
                if !is_identifier(&group.name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("category '{}' is not a valid identifier", group.name),
                        )
                        .at(format!("{}.{}", set.container_name(), group.name)),
                    );
                }
            }
        }

        for (set, group, entry) in entries(ir) {
            // Empty identifiers are reported by EmptyIdentifierLint
            if !entry.identifier.is_empty() && !is_identifier(&entry.identifier) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "constant '{}' for routine '{}' is not a valid identifier",
                            entry.identifier, entry.routine
                        ),
                    )
                    .at(location(set, group, &entry.identifier)),
                );
            }
        }
    }
}
