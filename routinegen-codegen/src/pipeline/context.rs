//! Compilation context passed through pipeline phases.

use routinegen_config::DEFAULT_SCHEMA;
use routinegen_ir::{ConstantsIR, RoutineCatalog};

use super::diagnostic::Diagnostic;
use crate::language::NamingConvention;

/// Options that change how the catalog is lowered and checked.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Schema the catalog was read from, recorded in the IR.
    pub schema: String,
    /// Sort categories and entries by name instead of catalog order.
    pub sort: bool,
    /// Report duplicate identifiers as errors instead of warnings.
    pub deny_duplicates: bool,
    /// Naming of the target language. When set, duplicates are detected on
    /// the names the emitter writes rather than on the IR identifiers.
    pub naming: Option<NamingConvention>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            sort: false,
            deny_duplicates: false,
            naming: None,
        }
    }
}

/// State threaded through the phases: the catalog going in, the IR coming
/// out, and every diagnostic raised on the way.
#[derive(Debug)]
pub struct CompilationContext {
    pub options: PipelineOptions,
    pub catalog: RoutineCatalog,
    /// Set by `LowerPhase`.
    pub ir: Option<ConstantsIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(catalog: RoutineCatalog, options: PipelineOptions) -> Self {
        Self {
            options,
            catalog,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the IR out of the context. `None` if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Option<ConstantsIR> {
        self.ir.take()
    }
}
