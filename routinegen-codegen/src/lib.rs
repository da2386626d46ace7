//! Shared code generation for routinegen.
//!
//! This crate turns a [`RoutineCatalog`](routinegen_ir::RoutineCatalog) into
//! a [`ConstantsIR`](routinegen_ir::ConstantsIR) and provides the building
//! blocks language emitters use to render it.
//!
//! # Module Organization
//!
//! - [`naming`] - Category and constant-name derivation from routine names
//! - [`grouping`] - Bucketing routine names by category in first-seen order
//! - [`pipeline`] - Lower, sort and validate phases with diagnostics
//! - [`builder`] - Indented code building
//! - [`language`] - The [`LanguageCodegen`] trait and naming conventions

pub mod builder;
pub mod grouping;
pub mod language;
pub mod naming;
pub mod pipeline;

pub use builder::{CodeBuilder, Indent};
pub use grouping::group_by_category;
pub use language::{ContainerFile, GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
pub use naming::{DEFAULT_CATEGORY, categorize, category_singular, derive_constant_name};
