//! Main TUI application
//!
//! One event loop over two channels: terminal input and ticker events.
//! The ticker task never touches this state directly; everything it wants
//! shown arrives here as a `TickerEvent`.

use crate::tui::event::{EventHandler, TuiEvent};
use crate::tui::widgets::{
    ClockPanel, Header, InputArea, InputState, LogView, LogViewState, QuickBar, StatusBar,
    IDLE_CLOCK, QUICK_ACTIONS,
};
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use telly_link::{
    ActivityLog, DisplayLink, Error, LinkConfig, TickerEvent, TickerHandle, TimeTicker,
};
use tokio::sync::{mpsc, Mutex};

/// Run the TUI application
pub async fn run(config: LinkConfig) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel the ticker task reports through
    let (ticker_tx, mut ticker_rx) = mpsc::unbounded_channel();

    let mut app = App::new(config, ticker_tx);

    // Create event handler
    let (mut event_handler, event_tx) = EventHandler::new();
    EventHandler::start(event_tx);

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            // Terminal events
            Some(event) = event_handler.next() => {
                match event {
                    TuiEvent::Quit => break,
                    TuiEvent::Key(key) => {
                        if let Some(action) = app.handle_key(key) {
                            app.dispatch(action).await;
                        }
                    }
                    TuiEvent::Resize(_, _) => {
                        // Terminal will handle resize automatically
                    }
                    TuiEvent::Tick => {}
                }
            }

            // Ticker events
            Some(event) = ticker_rx.recv() => {
                app.handle_ticker_event(event);
            }
        }
    }

    // Stop any running session before leaving
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// UI-triggered operations
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Connect when disconnected, disconnect when connected
    ToggleConnection,

    /// Start/stop the periodic time sender
    ToggleClock,

    /// Send one payload now
    Send(String),
}

/// Main application state
pub struct App {
    /// The one link, shared with the ticker task
    link: Arc<Mutex<DisplayLink>>,

    /// Target address, cached for rendering
    addr: String,

    /// Activity log
    log: ActivityLog,

    /// Log scroll state
    log_scroll: LogViewState,

    /// Visible log lines as of the last render
    log_visible: usize,

    /// Free-text input
    input: InputState,

    /// Running time-send session, if any
    ticker: Option<TickerHandle>,

    /// Sender handed to each new ticker task
    ticker_tx: mpsc::UnboundedSender<TickerEvent>,

    /// Connection state mirror for rendering; refreshed after every
    /// operation and ticker event
    connected: bool,

    /// Last clock text pushed by the ticker
    clock: String,
}

impl App {
    pub fn new(config: LinkConfig, ticker_tx: mpsc::UnboundedSender<TickerEvent>) -> Self {
        let addr = config.addr();
        Self {
            link: Arc::new(Mutex::new(DisplayLink::new(config))),
            addr,
            log: ActivityLog::new(),
            log_scroll: LogViewState::new(),
            log_visible: 0,
            input: InputState::new(),
            ticker: None,
            ticker_tx,
            connected: false,
            clock: IDLE_CLOCK.to_string(),
        }
    }

    /// Whether a time-send session is running
    pub fn sending_time(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| t.is_active())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // input
                Constraint::Length(4), // clock + quick send
                Constraint::Min(4),    // log
                Constraint::Length(1), // status bar
            ])
            .split(frame.area());

        frame.render_widget(Header::new(&self.addr, self.connected), chunks[0]);
        frame.render_widget(InputArea::new(&self.input), chunks[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(20)])
            .split(chunks[2]);
        frame.render_widget(ClockPanel::new(&self.clock, self.sending_time()), middle[0]);
        frame.render_widget(QuickBar::new(), middle[1]);

        self.log_visible = chunks[3].height.saturating_sub(2) as usize;
        frame.render_widget(LogView::new(&self.log, &self.log_scroll), chunks[3]);

        frame.render_widget(StatusBar::new(self.connected), chunks[4]);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Map a key press to an action; editing keys mutate the input field
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::F(2) => return Some(AppAction::ToggleConnection),
            KeyCode::F(3) => return Some(AppAction::ToggleClock),
            KeyCode::F(n @ 5..=8) => {
                let action = QUICK_ACTIONS[(n - 5) as usize];
                return Some(AppAction::Send(action.payload.to_string()));
            }
            KeyCode::Up => {
                self.scroll_log_up();
                return None;
            }
            KeyCode::Down => {
                self.log_scroll.scroll_down(self.log.len(), self.log_visible);
                return None;
            }
            _ => {}
        }

        if self.input.handle_key(key) {
            // Field clears now; the send result lands in the log
            let text = self.input.take();
            return Some(AppAction::Send(text));
        }

        None
    }

    fn scroll_log_up(&mut self) {
        if self.log_scroll.follow {
            self.log_scroll.detach_at(self.log.len(), self.log_visible);
        }
        self.log_scroll.scroll_up();
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub async fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::ToggleConnection => {
                if self.connected {
                    self.disconnect().await;
                } else {
                    self.connect().await;
                }
            }
            AppAction::ToggleClock => self.toggle_clock().await,
            AppAction::Send(payload) => self.send(&payload).await,
        }
    }

    /// Open the link. Blocks the loop up to the connect timeout.
    async fn connect(&mut self) {
        let result = self.link.lock().await.connect().await;
        match result {
            Ok(()) => {
                self.connected = true;
                self.log.push(format!("Connected to {}", self.addr));
            }
            Err(e) => {
                self.connected = false;
                self.log.push(e.to_string());
            }
        }
    }

    /// Close the link; stops any running time session first
    async fn disconnect(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.link.lock().await.disconnect();
        self.connected = false;
        self.log.push("Disconnected");
    }

    /// Send one payload and log the outcome
    async fn send(&mut self, payload: &str) {
        let result = self.link.lock().await.send(payload).await;
        match result {
            Ok(()) => self.log.push(format!("Sent: {}", payload)),
            Err(Error::NotConnected) => self.log.push("Not connected!"),
            Err(e) => {
                self.log.push(e.to_string());
                if e.dropped_link() {
                    self.connected = false;
                    if let Some(ticker) = self.ticker.take() {
                        ticker.stop();
                    }
                }
            }
        }
    }

    /// Start or stop the time-send session
    async fn toggle_clock(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            return;
        }

        match TimeTicker::start(self.link.clone(), self.ticker_tx.clone()).await {
            Ok(handle) => self.ticker = Some(handle),
            Err(_) => self.log.push("Connect first!"),
        }
    }

    // ========================================================================
    // Ticker events
    // ========================================================================

    pub fn handle_ticker_event(&mut self, event: TickerEvent) {
        match event {
            TickerEvent::Clock(time) => self.clock = time,
            TickerEvent::Sent(payload) => self.log.push(format!("Sent: {}", payload)),
            TickerEvent::SendFailed(message) => {
                self.log.push(message);
                self.connected = false;
            }
            TickerEvent::Stopped => {
                // Toggle label reverts with the handle gone
                self.ticker = None;
            }
        }
    }

    /// Stop the session on quit so the task winds down promptly
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, mpsc::UnboundedReceiver<TickerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(LinkConfig::default(), tx), rx)
    }

    async fn connected_app() -> (App, tokio::net::TcpStream, mpsc::UnboundedReceiver<TickerEvent>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(
            LinkConfig {
                host: addr.ip().to_string(),
                port: addr.port(),
                connect_timeout_secs: 1,
            },
            tx,
        );
        app.connect().await;
        let (peer, _) = listener.accept().await.unwrap();

        (app, peer, rx)
    }

    #[test]
    fn test_function_keys_map_to_actions() {
        let (mut app, _rx) = test_app();

        assert_eq!(
            app.handle_key(key(KeyCode::F(2))),
            Some(AppAction::ToggleConnection)
        );
        assert_eq!(app.handle_key(key(KeyCode::F(3))), Some(AppAction::ToggleClock));
        assert_eq!(
            app.handle_key(key(KeyCode::F(5))),
            Some(AppAction::Send("This is MSU Solar Car!".to_string()))
        );
        assert_eq!(
            app.handle_key(key(KeyCode::F(8))),
            Some(AppAction::Send("---".to_string()))
        );
    }

    #[test]
    fn test_enter_sends_and_clears_input() {
        let (mut app, _rx) = test_app();

        for c in "hello display".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let action = app.handle_key(key(KeyCode::Enter));

        assert_eq!(action, Some(AppAction::Send("hello display".to_string())));
        // Cleared before the send outcome is known
        assert!(app.input.content.is_empty());
    }

    #[test]
    fn test_enter_on_empty_input_is_noop() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
    }

    #[tokio::test]
    async fn test_send_while_disconnected_logs() {
        let (mut app, _rx) = test_app();

        app.send("67").await;

        assert!(!app.connected);
        assert_eq!(app.log.entries().last().unwrap().message, "Not connected!");
    }

    #[tokio::test]
    async fn test_connect_failure_logs_and_stays_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(
            LinkConfig {
                host: addr.ip().to_string(),
                port: addr.port(),
                connect_timeout_secs: 1,
            },
            tx,
        );

        app.connect().await;

        assert!(!app.connected);
        let last = &app.log.entries().last().unwrap().message;
        assert!(last.starts_with("Connection failed:"), "got: {last}");
    }

    #[tokio::test]
    async fn test_connect_and_send_roundtrip() {
        let (mut app, mut peer, _rx) = connected_app().await;
        assert!(app.connected);
        assert!(app
            .log
            .entries()
            .last()
            .unwrap()
            .message
            .starts_with("Connected to "));

        app.send("The Telly team").await;
        assert_eq!(
            app.log.entries().last().unwrap().message,
            "Sent: The Telly team"
        );

        app.disconnect().await;
        assert!(!app.connected);
        assert_eq!(app.log.entries().last().unwrap().message, "Disconnected");

        let mut received = String::new();
        peer.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "The Telly team");
    }

    #[tokio::test]
    async fn test_clock_toggle_requires_connection() {
        let (mut app, _rx) = test_app();

        app.toggle_clock().await;

        assert!(app.ticker.is_none());
        assert!(!app.sending_time());
        assert_eq!(app.log.entries().last().unwrap().message, "Connect first!");
    }

    #[tokio::test]
    async fn test_clock_session_lifecycle() {
        let (mut app, _peer, mut rx) = connected_app().await;

        app.toggle_clock().await;
        assert!(app.sending_time());

        // Second toggle stops the session; label reverts immediately
        app.toggle_clock().await;
        assert!(!app.sending_time());

        // Drain until the task confirms; handle is already gone
        loop {
            match rx.recv().await.unwrap() {
                TickerEvent::Stopped => break,
                event => app.handle_ticker_event(event),
            }
        }
        app.handle_ticker_event(TickerEvent::Stopped);
        assert!(app.ticker.is_none());
    }

    #[test]
    fn test_ticker_events_update_state() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.clock, IDLE_CLOCK);

        app.handle_ticker_event(TickerEvent::Clock("12:34:56".to_string()));
        assert_eq!(app.clock, "12:34:56");

        app.handle_ticker_event(TickerEvent::Sent("12:34:56".to_string()));
        assert_eq!(app.log.entries().last().unwrap().message, "Sent: 12:34:56");

        app.connected = true;
        app.handle_ticker_event(TickerEvent::SendFailed("Send failed: reset".to_string()));
        assert!(!app.connected);
        assert_eq!(
            app.log.entries().last().unwrap().message,
            "Send failed: reset"
        );
    }
}
