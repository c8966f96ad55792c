//! Layout rendering (search bar, status line)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ArtistLookup, UiState};

const KEY_HINTS: &str = " Enter search · Esc clear · ↑/↓ scroll · Ctrl-C quit";

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let (search_text, search_style) = if ui_state.search_query.is_empty() {
        ("Search for Artist", Style::default().fg(Color::DarkGray))
    } else {
        (ui_state.search_query.as_str(), Style::default().fg(Color::White))
    };

    let title = if ui_state.is_loading {
        " Search (searching...) "
    } else {
        " Search "
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(search, area);

    // Cursor after the query text, inside border and padding
    let typed = u16::try_from(ui_state.search_query.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(2).saturating_add(typed);
    if cursor_x < area.right().saturating_sub(1) {
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, results: Option<&ArtistLookup>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[0]);

    if let Some(lookup) = results {
        let summary = Line::from(vec![
            Span::styled(lookup.profile.name.clone(), Style::default().fg(Color::Green)),
            Span::raw(format!(" · {} albums ", lookup.albums.len())),
        ]);
        frame.render_widget(Paragraph::new(summary).alignment(Alignment::Right), chunks[1]);
    }
}
