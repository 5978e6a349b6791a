use ratatui::{
    prelude::*,
    widgets::{Block, Clear, HighlightSpacing, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app::{DashboardApp, View};
use super::widgets::file_row;

/// Title centered on the outer frame
pub const TITLE: &str = "}-= TreeTop =-{";

/// Drawn in front of the highlighted row
pub const HIGHLIGHT_MARK: &str = "-->";

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &mut DashboardApp) {
    let area = frame.area();
    render_outer_frame(frame, area, app);

    let surface = content_area(area);
    if surface.is_empty() {
        return;
    }

    render_file_list(frame, surface, app);

    if let View::Detail(index) = app.view {
        render_details(frame, surface, app, index);
    }
}

/// Area shared by the file list and the detail pane: inside the outer
/// border, leaving a blank row under the title.
pub fn content_area(area: Rect) -> Rect {
    if area.width < 2 || area.height < 3 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x + 1, area.y + 2, area.width - 2, area.height - 3)
}

/// Decorative border with the title and a key reminder
fn render_outer_frame(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let footer = format!(
        " q:quit  j/k:move  l:open  h:back  every {}s ",
        app.interval.as_secs()
    );

    let block = Block::bordered()
        .title(Line::from(TITLE).centered())
        .title_bottom(Line::from(footer).style(Style::default().fg(Color::DarkGray)));

    frame.render_widget(block, area);
}

fn render_file_list(frame: &mut Frame, area: Rect, app: &mut DashboardApp) {
    let text_width = usize::from(area.width).saturating_sub(HIGHLIGHT_MARK.width());
    let name_width = app
        .registry
        .entries()
        .iter()
        .map(|entry| entry.display_name().width())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = app
        .registry
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(file_row(
                entry.display_name(),
                name_width,
                &app.descriptions[i],
                app.marked[i],
                text_width,
            ))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol(HIGHLIGHT_MARK)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Overlay pane with the wrapped tail of one file
fn render_details(frame: &mut Frame, area: Rect, app: &mut DashboardApp, index: usize) {
    let Some(entry) = app.registry.get_mut(index) else {
        return;
    };

    // Recomputed on every frame: the pane size may have changed
    let lines: Vec<Line> = entry
        .detail_view(area.height, area.width)
        .into_iter()
        .map(Line::from)
        .collect();

    let block = Block::bordered().title(format!("[{}]", entry.display_name()));
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
