//! TUI widgets

pub mod clock_panel;
pub mod header;
pub mod input_area;
pub mod log_view;
pub mod quick_bar;
pub mod status_bar;

pub use clock_panel::{ClockPanel, IDLE_CLOCK};
pub use header::Header;
pub use input_area::{InputArea, InputState};
pub use log_view::{LogView, LogViewState};
pub use quick_bar::{QuickBar, QUICK_ACTIONS};
pub use status_bar::StatusBar;
