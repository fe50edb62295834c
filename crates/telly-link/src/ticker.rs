//! Periodic time sender
//!
//! One background task that pushes the current wall-clock time through the
//! link once per second. All UI-visible effects travel over the event
//! channel; the task never touches UI state directly.

use crate::{DisplayLink, Error, Result};
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// Fixed send cadence. Failure detection only needs to happen on the next
/// send attempt, so no finer-grained liveness checking.
pub const SEND_INTERVAL: Duration = Duration::from_secs(1);

/// 24-hour, zero-padded wall-clock format
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Events marshaled from the ticker task to the UI loop
#[derive(Debug, Clone)]
pub enum TickerEvent {
    /// Freshly formatted time, emitted before each send attempt
    Clock(String),

    /// A payload went out successfully
    Sent(String),

    /// The send failed; the loop exits after this
    SendFailed(String),

    /// Always the final event, on every exit path
    Stopped,
}

/// Cooperative stop handle for a running ticker
#[derive(Debug)]
pub struct TickerHandle {
    active: Arc<AtomicBool>,
}

impl TickerHandle {
    /// Request a stop. Observed at the top of the next iteration, so the
    /// loop may run for up to one more interval.
    pub fn stop(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// Spawns and owns the once-per-second send loop
pub struct TimeTicker;

impl TimeTicker {
    /// Start the ticker. Rejected with `NotConnected` before anything is
    /// spawned when the link is down.
    pub async fn start(
        link: Arc<Mutex<DisplayLink>>,
        events: mpsc::UnboundedSender<TickerEvent>,
    ) -> Result<TickerHandle> {
        Self::start_with_interval(link, events, SEND_INTERVAL).await
    }

    async fn start_with_interval(
        link: Arc<Mutex<DisplayLink>>,
        events: mpsc::UnboundedSender<TickerEvent>,
        interval: Duration,
    ) -> Result<TickerHandle> {
        if !link.lock().await.is_connected() {
            return Err(Error::NotConnected);
        }

        let active = Arc::new(AtomicBool::new(true));
        let flag = active.clone();

        tokio::spawn(async move {
            loop {
                if !flag.load(Ordering::Relaxed) {
                    break;
                }

                {
                    let mut link = link.lock().await;
                    if !link.is_connected() {
                        break;
                    }

                    let now = Local::now().format(TIME_FORMAT).to_string();
                    let _ = events.send(TickerEvent::Clock(now.clone()));

                    match link.send(&now).await {
                        Ok(()) => {
                            let _ = events.send(TickerEvent::Sent(now));
                        }
                        Err(e) => {
                            let _ = events.send(TickerEvent::SendFailed(e.to_string()));
                            break;
                        }
                    }
                }

                tokio::time::sleep(interval).await;
            }

            flag.store(false, Ordering::Relaxed);
            debug!("time sender stopped");
            let _ = events.send(TickerEvent::Stopped);
        });

        Ok(TickerHandle { active })
    }
}
