//! Terminal User Interface for tailing files.
//!
//! Provides a live dashboard using ratatui: one row per monitored file with
//! its last line, and an overlay pane with the wrapped tail of one file.

mod app;
mod event_handler;
mod render;
mod terminal;
mod widgets;

pub use app::{
    run_dashboard, DashboardApp, DashboardConfig, View, DEFAULT_INTERVAL_SECS,
    PENDING_DESCRIPTION,
};
pub use event_handler::DashboardEvent;
pub use render::{content_area, render_ui, HIGHLIGHT_MARK, TITLE};
pub use widgets::UPDATED_MARK;
