//! TCP link to the display
//!
//! One outbound stream socket, owned exclusively here. Connected state is
//! the presence of the stream: there is no separate flag to fall out of
//! sync. Payloads are raw UTF-8 with no framing; the display treats each
//! write as a full update.

use crate::{Error, LinkConfig, Result};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Manages the single TCP connection to the display
pub struct DisplayLink {
    config: LinkConfig,
    stream: Option<TcpStream>,
}

impl DisplayLink {
    /// Create a disconnected link for the configured target
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// Target address as `host:port`
    pub fn remote_addr(&self) -> String {
        self.config.addr()
    }

    /// Whether a live stream exists
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Open the connection, bounded by the configured timeout.
    ///
    /// On failure the link stays disconnected; there is no automatic
    /// retry. Any previously open stream is dropped first so at most one
    /// socket is ever live.
    pub async fn connect(&mut self) -> Result<()> {
        self.stream = None;

        let addr = self.config.addr();
        let stream = match timeout(self.config.connect_timeout(), TcpStream::connect(&addr)).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(Error::Connect(e.to_string())),
            Err(_) => {
                return Err(Error::Connect(format!(
                    "timed out after {}s",
                    self.config.connect_timeout_secs
                )))
            }
        };

        info!(%addr, "connected");
        self.stream = Some(stream);
        Ok(())
    }

    /// Close the connection. Idempotent; close-time errors are swallowed.
    pub fn disconnect(&mut self) {
        if self.stream.take().is_some() {
            debug!("disconnected");
        }
    }

    /// Write `text` as UTF-8 bytes in a single send.
    ///
    /// Fails with `NotConnected` when there is no stream. A transport
    /// failure drops the stream before returning, so a failed send always
    /// leaves the link disconnected.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        if let Err(e) = stream.write_all(text.as_bytes()).await {
            warn!(error = %e, "send failed, dropping link");
            self.stream = None;
            return Err(Error::Send(e.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn config_for(addr: std::net::SocketAddr) -> LinkConfig {
        LinkConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
            connect_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_send_while_disconnected() {
        let mut link = DisplayLink::new(LinkConfig::default());
        assert!(!link.is_connected());

        let err = link.send("hello").await.unwrap_err();
        assert!(matches!(err, Error::NotConnected));
        assert!(!link.is_connected());
    }

    #[tokio::test]
    async fn test_connect_and_send() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut link = DisplayLink::new(config_for(addr));
        link.connect().await.unwrap();
        assert!(link.is_connected());

        let (mut peer, _) = listener.accept().await.unwrap();

        link.send("This is MSU Solar Car!").await.unwrap();
        link.disconnect();

        let mut received = String::new();
        peer.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "This is MSU Solar Car!");
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop a listener so the port is known-free
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut link = DisplayLink::new(config_for(addr));
        let err = link.connect().await.unwrap_err();
        assert!(matches!(err, Error::Connect(_)));
        assert!(!link.is_connected());
    }

    #[tokio::test]
    async fn test_send_failure_forces_disconnect() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut link = DisplayLink::new(config_for(addr));
        link.connect().await.unwrap();

        let (peer, _) = listener.accept().await.unwrap();
        drop(peer);

        // The first write after the peer closes may still be buffered;
        // the reset surfaces within a few attempts.
        let mut failed = false;
        for _ in 0..10 {
            if link.send("67").await.is_err() {
                failed = true;
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        assert!(failed, "send against closed peer never failed");
        assert!(!link.is_connected());

        // A following disconnect does not error
        link.disconnect();
        assert!(!link.is_connected());
    }

    #[tokio::test]
    async fn test_reconnect_replaces_stream() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut link = DisplayLink::new(config_for(addr));
        link.connect().await.unwrap();
        let (mut first, _) = listener.accept().await.unwrap();

        link.connect().await.unwrap();
        let (mut second, _) = listener.accept().await.unwrap();

        // Old stream was dropped: its peer sees EOF
        let mut buf = Vec::new();
        first.read_to_end(&mut buf).await.unwrap();
        assert!(buf.is_empty());

        link.send("---").await.unwrap();
        link.disconnect();

        let mut received = String::new();
        second.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "---");
    }
}
