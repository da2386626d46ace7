//! Compilation pipeline for constants generation.
//!
//! A [`Pipeline`] takes a [`RoutineCatalog`](routinegen_ir::RoutineCatalog)
//! through explicit phases (lower → sort → validate) and collects
//! diagnostics along the way in a [`CompilationContext`].
//!
//! # Example
//!
//! ```
//! use routinegen_codegen::pipeline::{Pipeline, PipelineOptions};
//! use routinegen_ir::RoutineCatalog;
//!
//! let catalog = RoutineCatalog::new(
//!     vec!["product_add".to_string()],
//!     vec!["product_get_by_id".to_string()],
//! );
//!
//! let mut ctx = Pipeline::new(PipelineOptions::default()).run(catalog)?;
//! assert!(!ctx.has_warnings());
//!
//! let ir = ctx.take_ir().unwrap();
//! assert_eq!(ir.functions.categories[0].entries[0].identifier, "GetById");
//! # Ok::<(), eyre::Report>(())
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, PipelineOptions};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
