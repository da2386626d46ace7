use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "routinegen.toml";

/// A routinegen.toml file with its parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
    from_disk: bool,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            config,
            from_disk: true,
        })
    }

    /// Open a config file, falling back to defaults when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
                from_disk: false,
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the config was read from disk (false when defaults were used).
    pub fn from_disk(&self) -> bool {
        self.from_disk
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file, returning the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
