//! Link configuration
//!
//! Target address and connect timeout, loaded from an optional JSON file
//! and overridable from the command line.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Default display address, matching the device's static Ethernet setup
pub const DEFAULT_HOST: &str = "192.168.1.100";
pub const DEFAULT_PORT: u16 = 5000;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// Link Config
// ============================================================================

/// Connection settings for the display link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    /// Display host (IP literal or hostname)
    #[serde(default = "default_host")]
    pub host: String,

    /// Display TCP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target address as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connect timeout as a `Duration`
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Load from `path`, or from the default config file when `path` is
    /// `None`.
    ///
    /// A missing default file yields defaults; an explicitly given path
    /// must exist. A file that does not parse is a `Config` error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&file)
            .map_err(|e| Error::Config(format!("{}: {}", file.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", file.display(), e)))
    }

    /// Default config file location: `~/.tellycast/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tellycast").join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LinkConfig::default();
        assert_eq!(config.host, "192.168.1.100");
        assert_eq!(config.port, 5000);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.addr(), "192.168.1.100:5000");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_full() {
        let config: LinkConfig = serde_json::from_str(
            r#"{"host": "10.0.0.7", "port": 6000, "connectTimeoutSecs": 2}"#,
        )
        .unwrap();
        assert_eq!(config.host, "10.0.0.7");
        assert_eq!(config.port, 6000);
        assert_eq!(config.connect_timeout_secs, 2);
    }

    #[test]
    fn test_parse_partial_falls_back() {
        // Omitted fields take their defaults field-wise
        let config: LinkConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 9000);
        assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let err = LinkConfig::load(Some(Path::new("/nonexistent/tellycast.json"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_malformed_errors() {
        let dir = std::env::temp_dir().join("tellycast-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("bad.json");
        std::fs::write(&file, "{not json").unwrap();

        let err = LinkConfig::load(Some(&file)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = std::env::temp_dir().join("tellycast-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("good.json");
        std::fs::write(&file, r#"{"host": "display.local"}"#).unwrap();

        let config = LinkConfig::load(Some(&file)).unwrap();
        assert_eq!(config.host, "display.local");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
