//! # telly-link
//!
//! Core layer for Tellycast:
//! - Config: target address + connect timeout (file + overrides)
//! - Link: single outbound TCP connection to the display
//! - Ticker: background task sending the wall-clock time once per second
//! - Log: append-only activity log shown by the UI
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  UI event loop (telly-cli)                       │
//! │      │ connect / disconnect / send               │
//! │      ▼                                           │
//! │  DisplayLink ◄──── TimeTicker task (1 Hz)        │
//! │  (one TCP stream)      │                         │
//! │                        ▼                         │
//! │              TickerEvent channel ──► UI loop     │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod log;
pub mod ticker;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{
    LinkConfig, CONFIG_FILE, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT,
};

// ============================================================================
// Link
// ============================================================================
pub use link::DisplayLink;

// ============================================================================
// Ticker
// ============================================================================
pub use ticker::{TickerEvent, TickerHandle, TimeTicker, SEND_INTERVAL, TIME_FORMAT};

// ============================================================================
// Log
// ============================================================================
pub use log::{ActivityLog, LogEntry};
