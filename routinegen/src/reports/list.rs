//! List command report.

use eyre::Result;
use routinegen_ir::{RoutineCatalog, RoutineKind};

use super::output::{Output, Report};

/// Routine names read from the catalog.
#[derive(Debug)]
pub struct ListReport {
    pub schema: String,
    pub catalog: RoutineCatalog,
}

impl ListReport {
    /// `{"StoredProcedures": [...], "Functions": [...]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.catalog)?)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Schema", &self.schema);

        for kind in RoutineKind::ALL {
            let names = self.catalog.names(kind);
            out.newline();
            out.section(&format!("{} ({})", heading(kind), names.len()));
            if names.is_empty() {
                out.preformatted("  (none)");
            }
            for name in names {
                out.list_item(name);
            }
        }
    }
}

fn heading(kind: RoutineKind) -> &'static str {
    match kind {
        RoutineKind::Procedure => "Stored procedures",
        RoutineKind::Function => "Functions",
    }
}
