//! Settings for the demo server itself.
//!
//! These come from command-line flags, not from the project file. Every field
//! has a default so `sitedog demo` works with no flags at all.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default project configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./sitedog.yml";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8081;

/// Default file written by `sitedog render`.
pub const DEFAULT_RENDER_OUTPUT: &str = "sitedog.html";

/// Root settings for a demo session.
#[derive(Debug, Clone)]
pub struct DemoSettings {
    /// Path of the project configuration file.
    pub config_path: PathBuf,

    /// Address to bind (e.g., "127.0.0.1").
    pub host: String,

    /// Port to bind. 0 picks a free port.
    pub port: u16,

    /// Explicit template file, overriding the lookup chain.
    pub template: Option<PathBuf>,

    /// Grace window for in-flight requests during shutdown.
    pub grace_period: Duration,

    /// Upper bound for a single request.
    pub request_timeout: Duration,

    /// Open the default browser once the server is listening.
    pub open_browser: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            host: Ipv4Addr::LOCALHOST.to_string(),
            port: DEFAULT_PORT,
            template: None,
            grace_period: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            open_browser: true,
        }
    }
}

impl DemoSettings {
    /// Socket address to bind, if `host` is a valid IP.
    pub fn bind_address(&self) -> Option<SocketAddr> {
        self.host
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, self.port))
    }
}
