// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for routinegen, read from `routinegen.toml`.

mod config;
mod error;
mod file;
mod language;
mod parse;
mod validate;

pub use config::{
    Config, DEFAULT_ENV_VAR, DEFAULT_OUTPUT_DIR, DEFAULT_SCHEMA, DatabaseConfig, OutputConfig,
};
pub use error::{Error, Result};
pub use file::{ConfigFile, DEFAULT_CONFIG_FILE};
pub use language::Language;
