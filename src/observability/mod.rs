//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (path, address, error, request_id)
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//!
//! HTTP requests:
//!     → tower-http TraceLayer spans, tagged with x-request-id
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for messages meant for the operator; logs go to stderr
//! - Quiet by default, `-v` raises the level, `RUST_LOG` overrides everything

pub mod logging;

pub use logging::init_logging;
