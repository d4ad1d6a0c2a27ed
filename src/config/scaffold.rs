//! Starter configuration file for `sitedog init`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The document written by `init`.
pub const EXAMPLE_CONFIG: &str = "\
# Describe your project with a free key-value format, think simple.
#
# Random sample:

registrar: gandi # registrar service
dns: Route 53 # dns service
hosting: https://carrd.com # hosting service
mail: zoho # mail service
";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write the example configuration to `path`, refusing to overwrite.
pub fn write_example(path: &Path) -> Result<(), ScaffoldError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                ScaffoldError::AlreadyExists { path: path.to_path_buf() }
            } else {
                ScaffoldError::Write { path: path.to_path_buf(), source }
            }
        })?;

    file.write_all(EXAMPLE_CONFIG.as_bytes())
        .map_err(|source| ScaffoldError::Write { path: path.to_path_buf(), source })?;

    tracing::debug!(path = %path.display(), "Example configuration written");
    Ok(())
}
