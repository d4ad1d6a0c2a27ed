//! Opening the demo page in the user's browser.
//!
//! Launching is best effort: it runs in the background after the listener is
//! bound, nothing waits for it, and failures only produce a warning.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use url::Url;

/// Delay between the listener coming up and the browser being asked to open.
pub const LAUNCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum BrowserLaunchError {
    #[error("failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can show a URL to the user.
///
/// `open` may block; it is always called from a blocking thread.
pub trait BrowserLauncher: Send + Sync + 'static {
    fn open(&self, url: &Url) -> Result<(), BrowserLaunchError>;
}

/// The host's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<(), BrowserLaunchError> {
        open::that(url.as_str()).map_err(|source| BrowserLaunchError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Launcher used with `--no-open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBrowser;

impl BrowserLauncher for NoBrowser {
    fn open(&self, url: &Url) -> Result<(), BrowserLaunchError> {
        tracing::debug!(url = %url, "Browser launch disabled");
        Ok(())
    }
}

/// Open `url` after `delay` without blocking the caller.
///
/// The returned handle is only useful for aborting a launch that has not
/// started yet; its outcome is never needed.
pub fn launch_in_background(
    launcher: Arc<dyn BrowserLauncher>,
    url: Url,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let shown = url.to_string();
        match tokio::task::spawn_blocking(move || launcher.open(&url)).await {
            Ok(Ok(())) => tracing::debug!(url = %shown, "Browser launched"),
            Ok(Err(e)) => tracing::warn!(error = %e, "Could not open browser"),
            Err(e) => tracing::warn!(error = %e, "Browser launch task failed"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl BrowserLauncher for Recording {
        fn open(&self, url: &Url) -> Result<(), BrowserLaunchError> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct Failing;

    impl BrowserLauncher for Failing {
        fn open(&self, url: &Url) -> Result<(), BrowserLaunchError> {
            Err(BrowserLaunchError::Open {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no browser"),
            })
        }
    }

    fn url() -> Url {
        Url::parse("http://localhost:8081/").unwrap()
    }

    #[tokio::test]
    async fn test_launch_calls_launcher() {
        let recording = Arc::new(Recording::default());
        launch_in_background(recording.clone(), url(), Duration::ZERO).await.unwrap();

        assert_eq!(*recording.0.lock().unwrap(), vec!["http://localhost:8081/".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let handle = launch_in_background(Arc::new(Failing), url(), Duration::ZERO);
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_abort_before_delay() {
        let recording = Arc::new(Recording::default());
        let handle = launch_in_background(recording.clone(), url(), Duration::from_secs(60));
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
        assert!(recording.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_no_browser() {
        assert!(NoBrowser.open(&url()).is_ok());
    }
}
