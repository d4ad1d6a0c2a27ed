//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (controller.rs):
//!     Validate settings → Bind listener → Spawn server → Launch browser (fire-and-forget)
//!
//! Running:
//!     Block until a termination signal or a server fault
//!
//! Shutdown (shutdown.rs):
//!     Broadcast stop → Stop accepting → Drain in-flight requests (bounded) → Exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) / SIGTERM → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - States are explicit and observable: Idle → Starting → Running → ShuttingDown → Stopped
//! - Fail fast: a bind error ends startup, no port fallback
//! - Shutdown has a grace window; after it the server task is abandoned

pub mod controller;
pub mod shutdown;
pub mod signals;

pub use controller::{LifecycleController, LifecycleError, LifecycleState, Session, ShutdownOutcome};
pub use shutdown::Shutdown;
