use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::{backend::Backend, widgets::ListState, Terminal};

use crate::core::{ChangeState, FileRegistry, TailLimits};
use crate::error::TreetopError;

use super::event_handler::DashboardEvent;
use super::render::render_ui;
use super::terminal::TerminalGuard;

/// Refresh interval when none is given
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Row description shown until the first poll fills it in
pub const PENDING_DESCRIPTION: &str = "Updating...";

/// What the dashboard is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Only the file list
    List,
    /// The detail pane for the registry entry at this index
    Detail(usize),
}

/// Dashboard application state
///
/// List rows map 1:1 to registry entries by index.
pub struct DashboardApp {
    pub registry: FileRegistry,
    /// Secondary text of each list row
    pub descriptions: Vec<String>,
    /// Rows showing the updated mark in the current frame
    pub marked: Vec<bool>,
    pub list_state: ListState,
    pub view: View,
    pub should_quit: bool,
    pub interval: Duration,
}

impl DashboardApp {
    pub fn new(registry: FileRegistry, interval: Duration) -> Self {
        let rows = registry.len();
        let selected = if rows > 0 { Some(0) } else { None };

        Self {
            registry,
            descriptions: vec![PENDING_DESCRIPTION.to_string(); rows],
            marked: vec![false; rows],
            list_state: ListState::default().with_selected(selected),
            view: View::List,
            should_quit: false,
            interval,
        }
    }

    /// Index of the highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Handle a key/timeout event
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::Up => {
                if let Some(selected) = self.selected() {
                    self.list_state.select(Some(selected.saturating_sub(1)));
                }
            }
            DashboardEvent::Down => {
                if let Some(selected) = self.selected() {
                    let last = self.registry.len().saturating_sub(1);
                    self.list_state.select(Some((selected + 1).min(last)));
                }
            }
            DashboardEvent::Open => {
                if let Some(selected) = self.selected() {
                    self.view = View::Detail(selected);
                }
            }
            DashboardEvent::Back => self.view = View::List,
            DashboardEvent::None => {}
        }
    }

    /// Copy fresh tail lines into their rows and move the change flags
    /// into this frame's marks. Each change is marked for one frame only.
    pub fn prepare_frame(&mut self) {
        for (index, entry) in self.registry.iter_mut().enumerate() {
            let updated = entry.state == ChangeState::Updated;
            if updated {
                self.descriptions[index] = entry.tail_line().to_string();
                entry.state = ChangeState::Unchanged;
            }
            self.marked[index] = updated;
        }
    }

    /// One tick: poll every file, then redraw everything in a single frame
    pub fn refresh<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.registry.poll()?;

        self.prepare_frame();
        terminal
            .draw(|frame| render_ui(frame, self))
            .map_err(|e| TreetopError::tui(format!("Failed to draw: {}", e)))?;
        Ok(())
    }
}

/// Configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub interval: Duration,
    pub limits: TailLimits,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            limits: TailLimits::default(),
        }
    }
}

/// Run the dashboard until the user quits.
///
/// The terminal is restored before this returns, on success and on error.
pub fn run_dashboard(registry: FileRegistry, config: DashboardConfig) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = DashboardApp::new(registry, config.interval);

    // Force initial drawing
    app.refresh(guard.terminal())?;

    loop {
        // A timeout and a key press both end in a refresh
        let event = if event::poll(app.interval).context("Event poll failed")? {
            Some(event::read().context("Event read failed")?)
        } else {
            None
        };

        app.handle_event(DashboardEvent::from_terminal(event));
        if app.should_quit {
            break;
        }

        app.refresh(guard.terminal())?;
    }

    Ok(())
}
