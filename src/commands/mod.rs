//! Command implementations behind the CLI.
//!
//! `init` and `render` are plain file I/O; `demo` hands off to the
//! lifecycle controller after checking the configuration file exists.

pub mod demo;
pub mod init;
pub mod render;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::Command;
use crate::config::scaffold::ScaffoldError;
use crate::config::ConfigError;
use crate::lifecycle::signals::wait_for_signal;
use crate::lifecycle::LifecycleError;
use crate::render::RenderError;

/// Errors reported to the operator as a one-line diagnostic.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{} not found. Run 'sitedog init' first.", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("demo server stopped unexpectedly")]
    ServerFault,
}

/// Run a parsed command to completion.
pub async fn execute(command: Command) -> Result<(), CommandError> {
    match command {
        Command::Init(args) => init::run(&args.config),
        Command::Demo(args) => {
            // Handlers go in before startup so an early Ctrl+C still stops cleanly.
            let stop = wait_for_signal();
            demo::run(args.into_settings(), stop).await.map(|_| ())
        }
        Command::Render(args) => {
            render::run(&args.config, &args.output, args.template).await.map(|_| ())
        }
        Command::Version => {
            println!("sitedog version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
