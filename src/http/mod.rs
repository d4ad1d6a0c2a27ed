//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID for log correlation)
//!     → handlers.rs
//!         GET /       → ConfigStore → TemplateRenderer → text/html
//!         GET /config → ConfigStore → json mirror      → application/json
//!         other       → 404
//!     → response.rs (per-request failures → 500 + short body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::AppError;
pub use server::{AppState, DemoServer};
