//! sitedog
//!
//! # Architecture Overview
//!
//! ```text
//!   sitedog init  ──▶ config::scaffold ──▶ sitedog.yml
//!
//!   sitedog demo  ──▶ lifecycle::controller
//!                       │  bind ──▶ net::listener
//!                       │  serve ─▶ http::server ──┬─ GET /       ─▶ config::loader ─▶ render::template ─▶ text/html
//!                       │                          ├─ GET /config ─▶ config::loader ─▶ config::json     ─▶ application/json
//!                       │                          └─ other       ─▶ 404
//!                       │  open ──▶ browser (fire-and-forget)
//!                       └  wait ──▶ lifecycle::signals ─▶ graceful stop (bounded by grace window)
//!
//!   sitedog render ─▶ config::loader ─▶ render::template ─▶ sitedog.html
//! ```

use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use sitedog::cli::Cli;
use sitedog::commands;
use sitedog::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sitedog starting");

    let code = match commands::execute(cli.command).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    // Exit explicitly so abandoned connections or a pending browser launch
    // cannot keep the process alive.
    process::exit(code);
}
