//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration
//!     → template.rs (locate template, substitute placeholders)
//!         {{CONFIG}}      → JSON binding for scripts
//!         {{CONFIG_HTML}} → html.rs (escaped definition list)
//!         {{TITLE}}       → escaped page title
//!     → HTML string
//! ```
//!
//! # Design Decisions
//! - Templates are plain files looked up on every render, so local edits show up live
//! - A built-in template is the last fallback, never the only option
//! - Rendering a configuration cannot fail; only reading the template can

pub mod html;
pub mod template;

pub use template::{RenderError, TemplateRenderer, TemplateSource};
