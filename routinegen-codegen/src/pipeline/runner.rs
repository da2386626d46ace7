//! Pipeline orchestrator.

use eyre::Result;
use routinegen_ir::RoutineCatalog;

use super::{
    CompilationContext, Phase, PipelineOptions,
    phases::{LowerPhase, SortPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (lower, then sort when enabled, then validate)
/// followed by any user phases.
pub struct Pipeline {
    options: PipelineOptions,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of the phases that [`run`](Self::run) will execute, in order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.name())
            .collect()
    }

    /// Run the pipeline on a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including validation
    /// producing error diagnostics.
    pub fn run(&self, catalog: RoutineCatalog) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(catalog, self.options.clone());

        for phase in self.builtin_phases().iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }

    fn builtin_phases(&self) -> Vec<Box<dyn Phase>> {
        let mut phases: Vec<Box<dyn Phase>> = vec![Box::new(LowerPhase)];
        if self.options.sort {
            phases.push(Box::new(SortPhase));
        }
        phases.push(Box::new(ValidatePhase::new(&self.options)));
        phases
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}
