//! TCP listener binding.
//!
//! # Responsibilities
//! - Resolve the configured host/port
//! - Bind exactly once, failing fast when the port is taken
//! - Report the bound address and the URL to show the operator

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use url::Url;

use crate::config::DemoSettings;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Host is not a valid IP address.
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed after startup.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// A bound TCP listener for the demo server.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
    url: Url,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(settings: &DemoSettings) -> Result<Self, ListenerError> {
        let address = settings
            .bind_address()
            .ok_or_else(|| ListenerError::InvalidAddress(settings.host.clone()))?;

        let inner = TcpListener::bind(address)
            .await
            .map_err(|source| ListenerError::Bind { address, source })?;

        let local_addr = inner
            .local_addr()
            .map_err(|source| ListenerError::Bind { address, source })?;

        let url = browse_url(local_addr)
            .map_err(|_| ListenerError::InvalidAddress(local_addr.to_string()))?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr, url })
    }

    /// The address actually bound (with the real port when 0 was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// URL to open in a browser for this listener.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

/// Browser URL for a bound address. Loopback and wildcard binds use `localhost`.
pub fn browse_url(addr: SocketAddr) -> Result<Url, url::ParseError> {
    let ip = addr.ip();
    let host = if ip.is_loopback() || ip.is_unspecified() {
        "localhost".to_string()
    } else if ip.is_ipv6() {
        format!("[{ip}]")
    } else {
        ip.to_string()
    };

    Url::parse(&format!("http://{host}:{}/", addr.port()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_url() {
        assert_eq!(browse_url("127.0.0.1:8081".parse().unwrap()).unwrap().as_str(), "http://localhost:8081/");
        assert_eq!(browse_url("0.0.0.0:3030".parse().unwrap()).unwrap().as_str(), "http://localhost:3030/");
        assert_eq!(browse_url("[::1]:9000".parse().unwrap()).unwrap().as_str(), "http://localhost:9000/");
        assert_eq!(browse_url("192.168.1.20:80".parse().unwrap()).unwrap().as_str(), "http://192.168.1.20/");
        assert_eq!(browse_url("[fe80::1]:8081".parse().unwrap()).unwrap().as_str(), "http://[fe80::1]:8081/");
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let settings = DemoSettings { port: 0, ..DemoSettings::default() };
        let listener = Listener::bind(&settings).await.unwrap();

        assert_ne!(listener.local_addr().port(), 0);
        assert!(listener.url().as_str().starts_with("http://localhost:"));
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let settings = DemoSettings {
            port: taken.local_addr().unwrap().port(),
            ..DemoSettings::default()
        };

        let err = Listener::bind(&settings).await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { .. }));
    }

    #[tokio::test]
    async fn test_invalid_host() {
        let settings = DemoSettings { host: "not-an-ip".into(), ..DemoSettings::default() };
        assert!(matches!(
            Listener::bind(&settings).await,
            Err(ListenerError::InvalidAddress(_))
        ));
    }
}
