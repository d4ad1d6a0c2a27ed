//! Command-line interface definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::schema::{DemoSettings, DEFAULT_CONFIG_PATH, DEFAULT_PORT, DEFAULT_RENDER_OUTPUT};

#[derive(Debug, Parser)]
#[command(name = "sitedog")]
#[command(about = "Describe your project's infrastructure and preview it in the browser", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create sitedog.yml configuration file
    Init(InitArgs),
    /// Start demo server with a live page
    Demo(DemoArgs),
    /// Render the page to an HTML file
    Render(RenderArgs),
    /// Print version
    Version,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to config file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Path to config file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Port to run server on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Template file (default: ./demo.html.tpl, then ~/.sitedog/demo.html.tpl)
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Seconds to let in-flight requests finish on shutdown
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub grace_secs: u64,

    /// Do not open a browser
    #[arg(long)]
    pub no_open: bool,
}

impl DemoArgs {
    pub fn into_settings(self) -> DemoSettings {
        DemoSettings {
            config_path: self.config,
            host: self.host,
            port: self.port,
            template: self.template,
            grace_period: Duration::from_secs(self.grace_secs),
            open_browser: !self.no_open,
            ..DemoSettings::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to config file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path to output HTML file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RENDER_OUTPUT)]
    pub output: PathBuf,

    /// Template file (default: ./demo.html.tpl, then ~/.sitedog/demo.html.tpl)
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}
