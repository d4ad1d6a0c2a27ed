//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT (Ctrl+C) and, on Unix, SIGTERM
//! - Resolve a future when either arrives
//!
//! # Design Decisions
//! - Handlers are registered when `wait_for_signal` is called, not when the
//!   returned future is first polled, so a signal during startup is not lost
//! - A handler that cannot be installed is logged and never fires; the other still works

use std::future::Future;

/// Register termination signal handlers and return a future that resolves on
/// the first signal. Must be called inside a Tokio runtime.
#[cfg(unix)]
pub fn wait_for_signal() -> impl Future<Output = ()> + Send + 'static {
    use tokio::signal::unix::{signal, Signal, SignalKind};

    fn install(kind: SignalKind, name: &'static str) -> Option<Signal> {
        signal(kind)
            .inspect_err(|e| tracing::error!(error = %e, signal = name, "Failed to install signal handler"))
            .ok()
    }

    async fn recv(stream: Option<Signal>) {
        match stream {
            Some(mut stream) => {
                stream.recv().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    let interrupt = install(SignalKind::interrupt(), "SIGINT");
    let terminate = install(SignalKind::terminate(), "SIGTERM");

    async move {
        tokio::select! {
            _ = recv(interrupt) => tracing::info!(signal = "SIGINT", "Shutdown signal received"),
            _ = recv(terminate) => tracing::info!(signal = "SIGTERM", "Shutdown signal received"),
        }
    }
}

/// Register the Ctrl+C handler and return a future that resolves when it fires.
#[cfg(windows)]
pub fn wait_for_signal() -> impl Future<Output = ()> + Send + 'static {
    let interrupt = tokio::signal::windows::ctrl_c()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to install Ctrl+C handler"))
        .ok();

    async move {
        match interrupt {
            Some(mut stream) => {
                stream.recv().await;
                tracing::info!(signal = "Ctrl+C", "Shutdown signal received");
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_before_first_poll_is_seen() {
        let stop = wait_for_signal();

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), stop)
            .await
            .expect("signal sent before the first poll was lost");
    }
}
