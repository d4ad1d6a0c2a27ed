//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! sitedog.yml (YAML, user authored)
//!     → loader.rs (read & parse on every request, no caching)
//!     → Configuration (schema-less YAML value)
//!     → json.rs (JSON mirror for GET /config)
//!     → render/ (HTML page for GET /)
//!
//! CLI flags
//!     → schema.rs (DemoSettings with defaults)
//!     → validation.rs (semantic checks before startup)
//! ```
//!
//! # Design Decisions
//! - The project file is never cached: edits show up on the next request
//! - No schema is imposed on the project file
//! - Settings for the tool itself are separate from the project file

pub mod document;
pub mod json;
pub mod loader;
pub mod scaffold;
pub mod schema;
pub mod validation;

pub use document::Configuration;
pub use loader::{ConfigError, ConfigStore};
pub use schema::{DemoSettings, DEFAULT_CONFIG_PATH, DEFAULT_PORT};
