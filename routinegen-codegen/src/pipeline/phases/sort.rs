//! Sort phase - orders categories and entries by name.

use eyre::{Result, eyre};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that sorts categories by name and entries by identifier.
///
/// Entries with the same identifier are ordered by routine name. Without
/// this phase the output follows catalog order.
pub struct SortPhase;

impl Phase for SortPhase {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "Order categories and constants by name"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_mut()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))?;

        for set in [&mut ir.procedures, &mut ir.functions] {
            set.categories.sort_by(|a, b| a.name.cmp(&b.name));
            for group in &mut set.categories {
                group.entries.sort_by(|a, b| {
                    a.identifier
                        .cmp(&b.identifier)
                        .then_with(|| a.routine.cmp(&b.routine))
                });
            }
        }

        Ok(())
    }
}
