use std::path::PathBuf;

use clap::Args;
use routinegen_config::{Config, ConfigFile, DEFAULT_CONFIG_FILE};

use super::UnwrapOrExit;

/// Config file and connection overrides shared by catalog commands.
#[derive(Args)]
pub struct DatabaseArgs {
    /// Path to routinegen.toml (defaults to ./routinegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Connection string, overriding the config file and environment
    #[arg(long)]
    pub database_url: Option<String>,

    /// Schema to read routines from
    #[arg(long, value_parser = non_blank_schema)]
    pub schema: Option<String>,
}

/// Same rule `routinegen.toml` applies to `database.schema`.
fn non_blank_schema(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("database schema must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

impl DatabaseArgs {
    /// Load the config file and apply the command-line overrides.
    ///
    /// An explicit `--config` must exist; the default path may be missing.
    pub fn load_config(&self) -> Config {
        let file = match &self.config {
            Some(path) => ConfigFile::open(path),
            None => ConfigFile::open_or_default(DEFAULT_CONFIG_FILE),
        }
        .unwrap_or_exit();

        if file.from_disk() {
            tracing::debug!(path = %file.path().display(), "loaded config");
        }

        let mut config = file.into_config();
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if let Some(schema) = &self.schema {
            config.database.schema = schema.clone();
        }
        config
    }

    /// Resolve the connection string, exiting with a diagnostic when unset.
    pub fn connection_string(config: &Config) -> String {
        config.database.connection_string().unwrap_or_exit()
    }
}
