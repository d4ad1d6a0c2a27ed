//! `sitedog render`: write the demo page to a file without starting a server.

use std::path::{Path, PathBuf};

use crate::commands::CommandError;
use crate::config::{ConfigError, ConfigStore};
use crate::render::TemplateRenderer;

/// Render `config_path` into `output`. Returns the number of bytes written.
pub async fn run(
    config_path: &Path,
    output: &Path,
    template: Option<PathBuf>,
) -> Result<usize, CommandError> {
    let store = ConfigStore::new(config_path);
    let config = store.load().await.map_err(|e| match e {
        ConfigError::NotFound { path } => CommandError::ConfigNotFound(path),
        other => CommandError::Config(other),
    })?;

    let page = TemplateRenderer::new(template).render(&config).await?;

    tokio::fs::write(output, page.as_bytes())
        .await
        .map_err(|source| CommandError::Output { path: output.to_path_buf(), source })?;

    println!("Rendered {} to {}", config_path.display(), output.display());
    Ok(page.len())
}
