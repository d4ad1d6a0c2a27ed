//! Shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use url::Url;

use sitedog::browser::{BrowserLaunchError, BrowserLauncher};
use sitedog::config::ConfigStore;
use sitedog::http::{AppState, DemoServer};
use sitedog::lifecycle::{LifecycleController, Session};
use sitedog::render::TemplateRenderer;
use sitedog::DemoSettings;

pub const EXAMPLE: &str = "registrar: gandi\ndns: Route 53\nhosting: https://carrd.com\n";

/// Write a config file into `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("sitedog.yml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Browser launcher that reports the URLs it was asked to open.
pub struct RecordingBrowser(mpsc::UnboundedSender<Url>);

impl RecordingBrowser {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<Url>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self(tx)), rx)
    }
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &Url) -> Result<(), BrowserLaunchError> {
        let _ = self.0.send(url.clone());
        Ok(())
    }
}

/// Settings for a test session on an ephemeral port.
pub fn test_settings(config_path: PathBuf, grace_period: Duration) -> DemoSettings {
    DemoSettings {
        config_path,
        port: 0,
        grace_period,
        open_browser: false,
        ..DemoSettings::default()
    }
}

/// Controller using the built-in template and the given launcher.
pub fn controller(settings: DemoSettings, launcher: Arc<dyn BrowserLauncher>) -> LifecycleController {
    let state = AppState {
        store: ConfigStore::new(&settings.config_path),
        renderer: TemplateRenderer::builtin(),
    };
    LifecycleController::with_server(DemoServer::with_state(settings, state), launcher)
}

/// Start a session with a recording browser.
pub async fn start_session(config_path: PathBuf) -> (Session, mpsc::UnboundedReceiver<Url>) {
    let (browser, opened) = RecordingBrowser::new();
    let session = controller(test_settings(config_path, Duration::from_secs(2)), browser)
        .start()
        .await
        .unwrap();
    (session, opened)
}

/// Client that never reuses connections, so shutdown is not held up by idle sockets.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
