//! Error types for Tellycast

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Tellycast error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Link
    // ========================================================================
    #[error("Not connected")]
    NotConnected,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Send failed: {0}")]
    Send(String),

    // ========================================================================
    // Config
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error left the link disconnected as a side effect.
    ///
    /// A transport failure during send drops the stream; callers use this
    /// to refresh any cached connection state.
    pub fn dropped_link(&self) -> bool {
        matches!(self, Error::Send(_))
    }
}
