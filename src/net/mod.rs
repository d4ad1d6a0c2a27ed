//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! DemoSettings (host, port)
//!     → listener.rs (bind once, report bound address)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal; no fallback port is tried
//! - Port 0 is allowed and resolved to the real port after binding

pub mod listener;

pub use listener::{Listener, ListenerError};
