//! Configuration loading from disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::document::Configuration;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not a valid YAML document.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl ConfigError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound { path: path.to_path_buf() }
        } else {
            ConfigError::Read { path: path.to_path_buf(), source }
        }
    }
}

/// Reads the project configuration from a fixed path.
///
/// Every call goes back to disk, so a file being edited by hand is picked up
/// on the next load without restarting anything.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file currently exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load and parse the file without blocking the runtime.
    pub async fn load(&self) -> Result<Configuration, ConfigError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ConfigError::from_io(&self.path, e))?;
        parse_config(&self.path, bytes)
    }
}

fn parse_config(path: &Path, bytes: Vec<u8>) -> Result<Configuration, ConfigError> {
    let text = String::from_utf8(bytes).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Configuration::from_yaml(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
