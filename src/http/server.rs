//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the two demo routes and a 404 fallback
//! - Wire up middleware (tracing, request ID, timeout)
//! - Serve on a bound listener
//! - Stop accepting on the shutdown signal and drain in-flight requests

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ConfigStore, DemoSettings};
use crate::http::handlers;
use crate::net::{Listener, ListenerError};
use crate::render::TemplateRenderer;

/// Application state injected into handlers.
#[derive(Debug)]
pub struct AppState {
    pub store: ConfigStore,
    pub renderer: TemplateRenderer,
}

/// HTTP server for the demo page.
pub struct DemoServer {
    router: Router,
    settings: DemoSettings,
}

impl DemoServer {
    /// Create a new server with the given settings.
    pub fn new(settings: DemoSettings) -> Self {
        let state = AppState {
            store: ConfigStore::new(&settings.config_path),
            renderer: TemplateRenderer::new(settings.template.clone()),
        };
        Self::with_state(settings, state)
    }

    /// Create a server with explicit state (custom renderer, store).
    pub fn with_state(settings: DemoSettings, state: AppState) -> Self {
        let router = build_router(Arc::new(state), settings.request_timeout);
        Self { router, settings }
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<Listener, ListenerError> {
        Listener::bind(&self.settings).await
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// On shutdown the listener stops accepting and the call returns once
    /// in-flight requests have finished. Bounding that wait is the caller's job.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        tracing::info!(address = %listener.local_addr(), "HTTP server starting");

        axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::debug!("HTTP server draining connections");
            })
            .await
            .map_err(ListenerError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
fn build_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/config", get(handlers::config))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
