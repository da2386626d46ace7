//! Lint trait for constants IR validation.

use routinegen_ir::{CategoryGroup, ConstantEntry, ConstantSet, ConstantsIR};

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the lowered IR for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the IR and add any diagnostics.
    fn check(&self, ir: &ConstantsIR, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Every entry in the IR with its set and category, procedures first.
pub(crate) fn entries(
    ir: &ConstantsIR,
) -> impl Iterator<Item = (&ConstantSet, &CategoryGroup, &ConstantEntry)> {
    ir.sets().into_iter().flat_map(|set| {
        set.categories
            .iter()
            .flat_map(move |group| group.entries.iter().map(move |entry| (set, group, entry)))
    })
}

/// Dotted path of a constant, e.g. "Functions.Products.GetById".
pub(crate) fn location(set: &ConstantSet, group: &CategoryGroup, identifier: &str) -> String {
    format!("{}.{}.{}", set.container_name(), group.name, identifier)
}
