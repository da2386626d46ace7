//! Configuration types for routinegen.toml.

use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, Language, Result};

/// Environment variable consulted when no URL is configured.
pub const DEFAULT_ENV_VAR: &str = "DATABASE_URL";

/// Schema whose routines are read.
pub const DEFAULT_SCHEMA: &str = "public";

/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Constants";

/// Root configuration for routinegen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Generated output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[database]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string. Takes precedence over `env`.
    #[serde(default)]
    pub url: Option<String>,

    /// Environment variable holding the connection string.
    #[serde(default)]
    pub env: Option<String>,

    /// Schema filter for `information_schema.routines`.
    #[serde(default = "default_schema")]
    pub schema: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            env: None,
            schema: default_schema(),
        }
    }
}

impl DatabaseConfig {
    /// Name of the environment variable to consult.
    pub fn env_var(&self) -> &str {
        self.env.as_deref().unwrap_or(DEFAULT_ENV_VAR)
    }

    /// Resolve the connection string from `url` or the process environment.
    pub fn connection_string(&self) -> Result<String> {
        self.connection_string_with(|name| std::env::var(name).ok())
    }

    /// Resolve the connection string using a custom environment lookup.
    pub fn connection_string_with<F>(&self, lookup: F) -> Result<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.to_string());
        }

        let env = self.env_var();
        lookup(env)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                Box::new(Error::MissingConnectionString {
                    env: env.to_string(),
                })
            })
    }
}

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the generated files are written to.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Target language of the generated files.
    #[serde(default)]
    pub language: Language,

    /// Sort categories and entries by name instead of catalog order.
    #[serde(default)]
    pub sort: bool,

    /// Treat duplicate constant identifiers within a category as errors.
    #[serde(default)]
    pub deny_duplicates: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            language: Language::default(),
            sort: false,
            deny_duplicates: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
