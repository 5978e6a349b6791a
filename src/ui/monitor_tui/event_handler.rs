use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events that can occur in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Move the list highlight up
    Up,
    /// Move the list highlight down
    Down,
    /// Show the detail pane for the highlighted file
    Open,
    /// Hide the detail pane
    Back,
    /// Timeout, resize or an unbound key: refresh only
    None,
}

impl DashboardEvent {
    /// Map a key press to a dashboard event
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return DashboardEvent::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DashboardEvent::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => DashboardEvent::Quit,
            KeyCode::Up | KeyCode::Char('k') => DashboardEvent::Up,
            KeyCode::Down | KeyCode::Char('j') => DashboardEvent::Down,
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('l') => DashboardEvent::Open,
            KeyCode::Esc
            | KeyCode::Char(' ')
            | KeyCode::Char('x')
            | KeyCode::Char('X')
            | KeyCode::Char('h') => DashboardEvent::Back,
            _ => DashboardEvent::None,
        }
    }

    /// Map any terminal event; `None` stands for a poll timeout
    pub fn from_terminal(event: Option<Event>) -> Self {
        match event {
            Some(Event::Key(key)) => Self::from_key(key),
            _ => DashboardEvent::None,
        }
    }
}
