//! Generate typed constants for PostgreSQL stored procedures and functions.
//!
//! routinegen reads routine names from `information_schema.routines`, groups
//! them by the prefix before their first underscore, and writes one constants
//! file for stored procedures and one for functions.
//!
//! Applications call [`generate_database_objects`] at startup; the
//! `routinegen` binary exposes the same operations on the command line.
//!
//! ```no_run
//! use routinegen_config::Config;
//!
//! # async fn startup() -> eyre::Result<()> {
//! let config = Config::from_file("routinegen.toml")?;
//! routinegen::generate_database_objects(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod language;
pub mod ops;
pub mod reports;

pub use language::LanguageSupport;
pub use ops::{
    GenerateOptions, emit, fetch_catalog, generate, generate_database_objects, list,
};
