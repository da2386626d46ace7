//! Intermediate representation types for routinegen.
//!
//! # Architecture
//!
//! ```text
//! information_schema.routines → RoutineCatalog → ConstantsIR (lowering) → emitters
//! ```
//!
//! The IR types are language-agnostic: identifiers are stored in the
//! PascalCase form produced by lowering, and each emitter re-cases them for
//! its target language.

mod catalog;
mod constants;

pub use catalog::{RoutineCatalog, RoutineKind};
pub use constants::{CategoryGroup, ConstantEntry, ConstantSet, ConstantsIR};
