//! Core utilities and types for routinegen.
//!
//! This crate provides the file-writing primitives and string casing helpers
//! shared by the IR, the pipeline, and every language emitter.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WrittenFile};
// String utilities
pub use utils::{
    capitalize, is_identifier, title_case, to_identifier, to_screaming_snake_case, to_snake_case,
};
