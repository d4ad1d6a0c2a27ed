//! Template lookup and rendering.

use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

use crate::config::document::Configuration;
use crate::config::json::to_json;
use crate::render::html::{escape, script_safe, value_to_html};

/// Template file looked up in the working directory.
pub const LOCAL_TEMPLATE: &str = "demo.html.tpl";

/// Template file looked up under the home directory.
pub const GLOBAL_TEMPLATE: &str = ".sitedog/demo.html.tpl";

/// Template shipped with the binary, used when no file is found.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../assets/demo.html.tpl");

const CONFIG_PLACEHOLDER: &str = "{{CONFIG}}";
const CONFIG_HTML_PLACEHOLDER: &str = "{{CONFIG_HTML}}";
const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
const DEFAULT_TITLE: &str = "sitedog";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the template for a render came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Builtin,
}

/// Renders the demo page for a configuration.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    /// Explicit template, bypassing the lookup chain.
    explicit: Option<PathBuf>,
    /// Candidate files, tried in order.
    search_paths: Vec<PathBuf>,
}

impl TemplateRenderer {
    /// Renderer with the standard lookup chain: explicit file, `./demo.html.tpl`,
    /// `~/.sitedog/demo.html.tpl`, then the built-in template.
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let mut search_paths = vec![PathBuf::from(LOCAL_TEMPLATE)];
        if let Some(home) = dirs::home_dir() {
            search_paths.push(home.join(GLOBAL_TEMPLATE));
        }
        Self { explicit, search_paths }
    }

    /// Renderer that only ever uses the given file.
    pub fn with_template(path: impl Into<PathBuf>) -> Self {
        Self { explicit: Some(path.into()), search_paths: Vec::new() }
    }

    /// Renderer that always uses the built-in template.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Resolve which template the next render will use.
    pub fn source(&self) -> TemplateSource {
        if let Some(path) = &self.explicit {
            return TemplateSource::File(path.clone());
        }
        self.search_paths
            .iter()
            .find(|p| p.is_file())
            .map(|p| TemplateSource::File(p.clone()))
            .unwrap_or(TemplateSource::Builtin)
    }

    /// Render the page. The template is re-read on every call.
    pub async fn render(&self, config: &Configuration) -> Result<String, RenderError> {
        let template = match self.source() {
            TemplateSource::File(path) => read_template(&path).await?,
            TemplateSource::Builtin => BUILTIN_TEMPLATE.to_string(),
        };
        Ok(render_template(&template, config))
    }
}

async fn read_template(path: &Path) -> Result<String, RenderError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RenderError::Template { path: path.to_path_buf(), source })
}

/// Substitute the configuration into template text.
///
/// Placeholders are replaced in a single pass, so placeholder text that shows
/// up inside configuration values is left alone. Unknown `{{...}}` sequences
/// are copied through unchanged.
pub fn render_template(template: &str, config: &Configuration) -> String {
    let mut page = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        page.push_str(&rest[..start]);
        rest = &rest[start..];

        let (replacement, consumed) = if rest.starts_with(CONFIG_PLACEHOLDER) {
            (script_safe(&to_json(config).to_string()), CONFIG_PLACEHOLDER.len())
        } else if rest.starts_with(CONFIG_HTML_PLACEHOLDER) {
            (value_to_html(config.root()), CONFIG_HTML_PLACEHOLDER.len())
        } else if rest.starts_with(TITLE_PLACEHOLDER) {
            (escape(&page_title(config)), TITLE_PLACEHOLDER.len())
        } else {
            ("{{".to_string(), 2)
        };

        page.push_str(&replacement);
        rest = &rest[consumed..];
    }
    page.push_str(rest);

    page
}

fn page_title(config: &Configuration) -> String {
    match config.get("title") {
        Some(Value::String(title)) if !title.trim().is_empty() => title.clone(),
        _ => DEFAULT_TITLE.to_string(),
    }
}
