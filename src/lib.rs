//! sitedog: describe a project's infrastructure in a free-form YAML file and
//! preview it as a live page in the browser.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;

pub use config::{ConfigStore, Configuration, DemoSettings};
pub use http::DemoServer;
pub use lifecycle::{LifecycleController, Shutdown};
