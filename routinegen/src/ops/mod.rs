//! Core operations.
//!
//! The business logic behind the `routinegen` commands and the startup hook,
//! separated from CLI argument parsing and report rendering.

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, emit, fetch_catalog, generate, generate_database_objects};
pub use list::list;
