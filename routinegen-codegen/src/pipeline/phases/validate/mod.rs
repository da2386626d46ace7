//! Validate phase - runs lints on the lowered IR.

mod lint;
pub mod lints;

use eyre::{Result, bail, eyre};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateConstantLint, EmptyIdentifierLint, EscapedLiteralLint, InvalidIdentifierLint,
};

use crate::pipeline::{CompilationContext, Phase, PipelineOptions, Severity};

/// Phase that validates the IR using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints for these options.
    pub fn new(options: &PipelineOptions) -> Self {
        let duplicate_severity = if options.deny_duplicates {
            Severity::Error
        } else {
            Severity::Warning
        };

        Self {
            lints: vec![
                Box::new(DuplicateConstantLint::new(duplicate_severity, options.naming)),
                Box::new(EmptyIdentifierLint),
                Box::new(InvalidIdentifierLint),
                Box::new(EscapedLiteralLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new(&PipelineOptions::default())
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check derived constants and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))?;

        for lint in &self.lints {
            lint.check(ir, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            let details: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            bail!(
                "validation failed with {} error(s)\n{}",
                ctx.error_count(),
                details.join("\n")
            );
        }

        Ok(())
    }
}
