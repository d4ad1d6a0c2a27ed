//! Route handlers.
//!
//! Each request re-reads the configuration file, so the page always reflects
//! what is on disk.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::config::json::serialize;
use crate::http::request::request_id;
use crate::http::response::AppError;
use crate::http::server::AppState;

/// `GET /`: the rendered demo page.
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let config = state.store.load().await.inspect_err(|e| {
        tracing::warn!(request_id = %request_id(&headers), error = %e, "Failed to load config");
    })?;

    let page = state.renderer.render(&config).await.inspect_err(|e| {
        tracing::warn!(request_id = %request_id(&headers), error = %e, "Failed to render page");
    })?;

    tracing::debug!(
        request_id = %request_id(&headers),
        entries = config.len(),
        bytes = page.len(),
        "Page rendered"
    );
    Ok(Html(page))
}

/// `GET /config`: the configuration as pretty-printed JSON.
pub async fn config(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let config = state.store.load().await.inspect_err(|e| {
        tracing::warn!(request_id = %request_id(&headers), error = %e, "Failed to load config");
    })?;

    let body = serialize(&config).inspect_err(|e| {
        tracing::warn!(request_id = %request_id(&headers), error = %e, "Failed to serialize config");
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Anything else.
pub async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "Not Found")
}
