//! Append-only activity log
//!
//! Purely observational: insertion order is log order, nothing is ever
//! deleted, nothing persists across runs.

use chrono::{DateTime, Local};

/// One timestamped log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    /// Render as `[HH:MM:SS] message`
    pub fn format(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// The activity log shown in the UI
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, stamped with the current local time
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
