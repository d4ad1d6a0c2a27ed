//! Demo session orchestration.
//!
//! # Responsibilities
//! - Validate settings and bind the listener (fatal on failure)
//! - Start the HTTP server and the browser launch
//! - Block until told to stop or until the server fails
//! - Stop the server within a bounded grace window
//!
//! # Design Decisions
//! - One controller per session, passed around explicitly; no globals
//! - The stop trigger is any future, so tests need no real signals
//! - A grace window that runs out is an expected outcome, not an error

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

use crate::browser::{launch_in_background, BrowserLauncher, NoBrowser, SystemBrowser, LAUNCH_DELAY};
use crate::config::validation::{validate_settings, ValidationError};
use crate::config::DemoSettings;
use crate::http::DemoServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::ListenerError;

/// Where a demo session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Starting,
    Running,
    ShuttingDown,
    Stopped,
}

/// How a running session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// In-flight requests finished inside the grace window.
    Graceful,
    /// The grace window ran out and the server was abandoned.
    TimedOut,
    /// The server stopped on its own with an error.
    Faulted,
}

/// Errors that end startup.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid settings: {}", join_errors(.0))]
    InvalidSettings(Vec<ValidationError>),

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Drives a demo session from startup to the moment it is started.
pub struct LifecycleController {
    server: DemoServer,
    launcher: Arc<dyn BrowserLauncher>,
    state: watch::Sender<LifecycleState>,
}

impl LifecycleController {
    /// Controller for the given settings, using the system browser unless
    /// `open_browser` is off.
    pub fn new(settings: DemoSettings) -> Self {
        let launcher: Arc<dyn BrowserLauncher> = if settings.open_browser {
            Arc::new(SystemBrowser)
        } else {
            Arc::new(NoBrowser)
        };
        Self::with_server(DemoServer::new(settings), launcher)
    }

    /// Controller for a prepared server and launcher.
    pub fn with_server(server: DemoServer, launcher: Arc<dyn BrowserLauncher>) -> Self {
        let (state, _) = watch::channel(LifecycleState::Idle);
        Self { server, launcher, state }
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Bind, start serving, and kick off the browser launch.
    ///
    /// Returns once the listener is accepting; the browser may not have
    /// opened yet.
    pub async fn start(self) -> Result<Session, LifecycleError> {
        transition(&self.state, LifecycleState::Starting);

        let settings = self.server.settings();
        let grace_period = settings.grace_period;
        if let Err(errors) = validate_settings(settings) {
            transition(&self.state, LifecycleState::Stopped);
            return Err(LifecycleError::InvalidSettings(errors));
        }

        let listener = match self.server.bind().await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(error = %e, "Startup failed");
                transition(&self.state, LifecycleState::Stopped);
                return Err(e.into());
            }
        };
        let local_addr = listener.local_addr();
        let url = listener.url().clone();

        let shutdown = Shutdown::new();
        let server_task = tokio::spawn(self.server.run(listener, shutdown.subscribe()));
        let browser_task = launch_in_background(self.launcher, url.clone(), LAUNCH_DELAY);

        transition(&self.state, LifecycleState::Running);
        tracing::info!(url = %url, "Demo server running");

        Ok(Session {
            url,
            local_addr,
            grace_period,
            shutdown,
            server_task,
            browser_task,
            state: self.state,
        })
    }
}

/// A running demo session.
pub struct Session {
    url: Url,
    local_addr: SocketAddr,
    grace_period: Duration,
    shutdown: Shutdown,
    server_task: JoinHandle<Result<(), ListenerError>>,
    browser_task: JoinHandle<()>,
    state: watch::Sender<LifecycleState>,
}

impl Session {
    /// Address for the operator's browser.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Block until `stop` resolves or the server fails, then shut down.
    pub async fn wait<F>(self, stop: F) -> ShutdownOutcome
    where
        F: Future<Output = ()>,
    {
        let Session { grace_period, shutdown, mut server_task, browser_task, state, .. } = self;

        let fault = tokio::select! {
            _ = stop => None,
            result = &mut server_task => Some(result),
        };

        transition(&state, LifecycleState::ShuttingDown);
        browser_task.abort();

        let outcome = match fault {
            Some(result) => {
                match result {
                    Ok(Ok(())) => tracing::error!("HTTP server exited unexpectedly"),
                    Ok(Err(e)) => tracing::error!(error = %e, "HTTP server failed"),
                    Err(e) => tracing::error!(error = %e, "HTTP server task failed"),
                }
                ShutdownOutcome::Faulted
            }
            None => {
                shutdown.trigger();
                match tokio::time::timeout(grace_period, &mut server_task).await {
                    Ok(Ok(Ok(()))) => ShutdownOutcome::Graceful,
                    Ok(Ok(Err(e))) => {
                        tracing::error!(error = %e, "HTTP server failed during shutdown");
                        ShutdownOutcome::Faulted
                    }
                    Ok(Err(e)) => {
                        tracing::error!(error = %e, "HTTP server task failed during shutdown");
                        ShutdownOutcome::Faulted
                    }
                    Err(_) => {
                        tracing::warn!(
                            grace_secs = grace_period.as_secs_f64(),
                            "Grace period elapsed with requests in flight"
                        );
                        server_task.abort();
                        ShutdownOutcome::TimedOut
                    }
                }
            }
        };

        transition(&state, LifecycleState::Stopped);
        tracing::info!(outcome = ?outcome, "Demo server stopped");
        outcome
    }
}

fn transition(state: &watch::Sender<LifecycleState>, next: LifecycleState) {
    let previous = state.send_replace(next);
    tracing::debug!(from = ?previous, to = ?next, "Lifecycle transition");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::AppState;
    use crate::config::ConfigStore;
    use crate::render::TemplateRenderer;
    use std::path::PathBuf;

    fn controller(settings: DemoSettings) -> LifecycleController {
        let state = AppState {
            store: ConfigStore::new(&settings.config_path),
            renderer: TemplateRenderer::builtin(),
        };
        LifecycleController::with_server(DemoServer::with_state(settings, state), Arc::new(NoBrowser))
    }

    fn settings() -> DemoSettings {
        DemoSettings {
            config_path: PathBuf::from("unused.yml"),
            port: 0,
            open_browser: false,
            ..DemoSettings::default()
        }
    }

    #[tokio::test]
    async fn test_states_through_a_session() {
        let controller = controller(settings());
        let states = controller.subscribe();
        assert_eq!(*states.borrow(), LifecycleState::Idle);

        let session = controller.start().await.unwrap();
        assert_eq!(session.state(), LifecycleState::Running);
        assert_eq!(*states.borrow(), LifecycleState::Running);

        let outcome = session.wait(async {}).await;
        assert_eq!(outcome, ShutdownOutcome::Graceful);
        assert_eq!(*states.borrow(), LifecycleState::Stopped);
    }

    #[tokio::test]
    async fn test_invalid_settings_never_bind() {
        let controller = controller(DemoSettings { host: "nowhere".into(), ..settings() });
        let states = controller.subscribe();

        let err = controller.start().await.err().unwrap();
        assert!(matches!(err, LifecycleError::InvalidSettings(_)));
        assert!(err.to_string().contains("invalid host address 'nowhere'"));
        assert_eq!(*states.borrow(), LifecycleState::Stopped);
    }

    #[tokio::test]
    async fn test_port_in_use_is_fatal() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let controller = controller(DemoSettings { port, ..settings() });

        let err = controller.start().await.err().unwrap();
        assert!(matches!(err, LifecycleError::Listener(ListenerError::Bind { .. })));
    }
}
