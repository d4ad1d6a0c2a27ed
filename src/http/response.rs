//! Error responses.
//!
//! # Responsibilities
//! - Map per-request failures to HTTP status codes
//! - Keep error bodies short and plain text
//!
//! # Design Decisions
//! - Every configuration or template failure is a 500; the server keeps running
//! - Details go to the log at `warn`, a one-line summary goes to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;

/// A failure while serving a single request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error reading config: {0}")]
    Config(#[from] ConfigError),

    #[error("Error rendering page: {0}")]
    Render(#[from] RenderError),

    #[error("Error serializing config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Render(_) | AppError::Serialize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
