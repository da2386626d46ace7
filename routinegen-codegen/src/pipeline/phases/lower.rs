//! Lower phase - turns routine names into the constants IR.

use eyre::Result;
use routinegen_ir::{
    CategoryGroup, ConstantEntry, ConstantSet, ConstantsIR, RoutineCatalog, RoutineKind,
};

use crate::{
    grouping::group_by_category,
    naming::derive_constant_name,
    pipeline::{CompilationContext, Phase},
};

/// Phase that groups routines by category and derives constant names.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Group routines by category and derive constant names"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_catalog(&ctx.catalog, &ctx.options.schema));
        Ok(())
    }
}

/// Lower a catalog into a constants IR, keeping catalog order.
pub fn lower_catalog(catalog: &RoutineCatalog, schema: &str) -> ConstantsIR {
    let mut ir = ConstantsIR::empty(schema);
    for kind in RoutineKind::ALL {
        *ir.set_mut(kind) = lower_set(kind, catalog.names(kind));
        tracing::debug!(
            %kind,
            categories = ir.set(kind).categories.len(),
            "lowered routines"
        );
    }
    ir
}

fn lower_set(kind: RoutineKind, routines: &[String]) -> ConstantSet {
    let categories = group_by_category(routines)
        .into_iter()
        .map(|(category, routines)| {
            let entries = routines
                .into_iter()
                .map(|routine| {
                    ConstantEntry::new(derive_constant_name(&category, &routine), routine)
                })
                .collect();
            CategoryGroup {
                name: category,
                entries,
            }
        })
        .collect();

    ConstantSet { kind, categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_products_and_orders() {
        let catalog = RoutineCatalog::new(
            Vec::new(),
            names(&["product_get_by_id", "order_create", "product_list"]),
        );

        let ir = lower_catalog(&catalog, "public");

        assert!(ir.procedures.is_empty());
        let functions = &ir.functions;
        assert_eq!(functions.categories.len(), 2);

        let products = &functions.categories[0];
        assert_eq!(products.name, "Products");
        assert_eq!(products.routine_for("GetById"), Some("product_get_by_id"));
        assert_eq!(products.routine_for("List"), Some("product_list"));

        let orders = &functions.categories[1];
        assert_eq!(orders.name, "Orders");
        assert_eq!(orders.routine_for("Create"), Some("order_create"));
    }

    #[test]
    fn test_common_category() {
        let catalog = RoutineCatalog::new(names(&["_refresh_cache"]), Vec::new());

        let ir = lower_catalog(&catalog, "app");

        assert_eq!(ir.schema, "app");
        let common = ir.procedures.category("Common").unwrap();
        assert_eq!(common.entries, [ConstantEntry::new("RefreshCache", "_refresh_cache")]);
    }

    #[test]
    fn test_kinds_are_independent() {
        let catalog = RoutineCatalog::new(names(&["order_close"]), names(&["order_total"]));

        let ir = lower_catalog(&catalog, "public");

        assert_eq!(ir.procedures.kind, RoutineKind::Procedure);
        assert_eq!(ir.functions.kind, RoutineKind::Function);
        assert_eq!(
            ir.procedures.category("Orders").unwrap().routine_for("Close"),
            Some("order_close")
        );
        assert_eq!(
            ir.functions.category("Orders").unwrap().routine_for("Total"),
            Some("order_total")
        );
    }

    #[test]
    fn test_entry_count_matches_catalog() {
        let catalog = RoutineCatalog::new(
            names(&["a_b", "c", "_d", "a_e"]),
            names(&["x_y", "x_y"]),
        );

        let ir = lower_catalog(&catalog, "public");

        assert_eq!(ir.procedures.entry_count(), 4);
        assert_eq!(ir.functions.entry_count(), 2);
    }
}
