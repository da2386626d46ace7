//! Constants IR.
//!
//! Lowering turns a [`RoutineCatalog`](crate::RoutineCatalog) into one
//! [`ConstantSet`] per [`RoutineKind`]. Each set holds category groups in
//! the order they were first seen, and each group holds its entries in the
//! order the routines were read.

use serde::Serialize;

use crate::RoutineKind;

/// Everything an emitter needs to render both output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantsIR {
    /// Schema the routines were read from.
    pub schema: String,
    /// Stored procedure constants.
    pub procedures: ConstantSet,
    /// Function constants.
    pub functions: ConstantSet,
}

impl ConstantsIR {
    /// Create an IR with empty sets for both kinds.
    pub fn empty(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            procedures: ConstantSet::new(RoutineKind::Procedure),
            functions: ConstantSet::new(RoutineKind::Function),
        }
    }

    /// The set for the given kind.
    pub fn set(&self, kind: RoutineKind) -> &ConstantSet {
        match kind {
            RoutineKind::Procedure => &self.procedures,
            RoutineKind::Function => &self.functions,
        }
    }

    /// Mutable access to the set for the given kind.
    pub fn set_mut(&mut self, kind: RoutineKind) -> &mut ConstantSet {
        match kind {
            RoutineKind::Procedure => &mut self.procedures,
            RoutineKind::Function => &mut self.functions,
        }
    }

    /// Both sets, procedures first.
    pub fn sets(&self) -> [&ConstantSet; 2] {
        [&self.procedures, &self.functions]
    }
}

/// All constants of one routine kind, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantSet {
    pub kind: RoutineKind,
    pub categories: Vec<CategoryGroup>,
}

impl ConstantSet {
    pub fn new(kind: RoutineKind) -> Self {
        Self {
            kind,
            categories: Vec::new(),
        }
    }

    /// Container name for the generated file (e.g., "StoredProcedures").
    pub fn container_name(&self) -> &'static str {
        self.kind.container_name()
    }

    /// Find a category group by name.
    pub fn category(&self, name: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of constants across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// One category and its constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category name (e.g., "Products").
    pub name: String,
    pub entries: Vec<ConstantEntry>,
}

impl CategoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Find the routine bound to an identifier, if any.
    pub fn routine_for(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.identifier == identifier)
            .map(|e| e.routine.as_str())
    }
}

/// A constant binding an identifier to a routine name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantEntry {
    /// PascalCase identifier (e.g., "GetById").
    pub identifier: String,
    /// Full routine name (e.g., "product_get_by_id").
    pub routine: String,
}

impl ConstantEntry {
    pub fn new(identifier: impl Into<String>, routine: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            routine: routine.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> CategoryGroup {
        CategoryGroup {
            name: "Products".into(),
            entries: vec![
                ConstantEntry::new("GetById", "product_get_by_id"),
                ConstantEntry::new("GetByTenant", "product_get_by_tenant"),
            ],
        }
    }

    #[test]
    fn test_empty_ir_has_both_kinds() {
        let ir = ConstantsIR::empty("public");

        assert_eq!(ir.procedures.kind, RoutineKind::Procedure);
        assert_eq!(ir.functions.kind, RoutineKind::Function);
        assert!(ir.sets().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_set_lookup() {
        let mut ir = ConstantsIR::empty("public");
        ir.set_mut(RoutineKind::Function).categories.push(products());

        let functions = ir.set(RoutineKind::Function);
        assert_eq!(functions.container_name(), "Functions");
        assert_eq!(functions.entry_count(), 2);
        assert!(functions.category("Products").is_some());
        assert!(functions.category("Orders").is_none());
        assert!(ir.set(RoutineKind::Procedure).is_empty());
    }

    #[test]
    fn test_routine_for_identifier() {
        let group = products();

        assert_eq!(group.routine_for("GetById"), Some("product_get_by_id"));
        assert_eq!(group.routine_for("Missing"), None);
    }
}
