//! Built-in pipeline phases.
//!
//! - [`LowerPhase`] - groups routines by category and derives identifiers
//! - [`SortPhase`] - orders categories and entries by name
//! - [`ValidatePhase`] - lints the lowered IR and collects diagnostics

mod lower;
mod sort;
mod validate;

pub use lower::{LowerPhase, lower_catalog};
pub use sort::SortPhase;
pub use validate::{
    DuplicateConstantLint, EmptyIdentifierLint, EscapedLiteralLint, InvalidIdentifierLint, Lint,
    LintInfo, ValidatePhase,
};
