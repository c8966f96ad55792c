//! Profile and album cards, laid out as a scrollable grid

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::utils::{calculate_num_width, card_columns, row_count, truncate_string};
use crate::model::{Album, ArtistLookup, ArtistProfile, Track};

/// Card height including borders
pub const CARD_HEIGHT: u16 = 16;

/// One cell of the grid: the profile card comes first, then albums in order
pub enum Card<'a> {
    Profile(&'a ArtistProfile),
    Album(&'a Album),
}

impl<'a> Card<'a> {
    pub fn all(lookup: &'a ArtistLookup) -> Vec<Card<'a>> {
        std::iter::once(Card::Profile(&lookup.profile))
            .chain(lookup.albums.iter().map(Card::Album))
            .collect()
    }

    fn title(&self) -> &str {
        match self {
            Card::Profile(profile) => &profile.name,
            Card::Album(album) => &album.name,
        }
    }

    fn subtitle(&self) -> &str {
        match self {
            Card::Profile(profile) => profile.genre.as_deref().unwrap_or(""),
            Card::Album(album) => &album.release_date,
        }
    }

    fn image_url(&self) -> Option<&str> {
        match self {
            Card::Profile(profile) => profile.image_url.as_deref(),
            Card::Album(album) => album.image_url.as_deref(),
        }
    }

    fn tracks(&self) -> &[Track] {
        match self {
            Card::Profile(profile) => &profile.top_tracks,
            Card::Album(album) => &album.tracks,
        }
    }

    fn accent(&self) -> Color {
        match self {
            Card::Profile(_) => Color::Green,
            Card::Album(_) => Color::Cyan,
        }
    }
}

/// Body lines of a card, fitted into `max_lines` rows of `width` columns.
pub fn card_lines(card: &Card, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_string(card.subtitle(), width),
        Style::default().fg(card.accent()).add_modifier(Modifier::ITALIC),
    ))];

    if let Some(url) = card.image_url() {
        lines.push(Line::from(Span::styled(
            truncate_string(url, width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if matches!(card, Card::Profile(_)) {
        lines.push(Line::from(Span::styled(
            "Top Tracks:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    let tracks = card.tracks();
    let num_width = calculate_num_width(tracks.len());
    let room = max_lines.saturating_sub(lines.len());
    let shown = if tracks.len() > room {
        room.saturating_sub(1)
    } else {
        tracks.len()
    };

    for (i, track) in tracks.iter().take(shown).enumerate() {
        let number = format!("{:>width$}.", i + 1, width = num_width - 1);
        let name_width = width.saturating_sub(number.len() + 1);
        lines.push(Line::from(vec![
            Span::styled(number, Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::raw(truncate_string(&track.name, name_width)),
        ]));
    }

    if shown < tracks.len() && room > 0 {
        lines.push(Line::from(Span::styled(
            format!("... {} more", tracks.len() - shown),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", card.title()))
        .title_style(Style::default().fg(card.accent()).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(card.accent()));

    let inner = block.inner(area);
    let lines = card_lines(card, inner.width as usize, inner.height as usize);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the card grid, with `scroll_row` as the first visible row.
pub fn render_cards(frame: &mut Frame, area: Rect, lookup: &ArtistLookup, scroll_row: usize) {
    let cards = Card::all(lookup);
    let columns = card_columns(area.width);
    let total_rows = row_count(cards.len(), columns);

    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let first_row = scroll_row.min(total_rows.saturating_sub(1));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), visible_rows)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(std::iter::repeat_n(Constraint::Ratio(1, columns as u32), columns))
            .split(row_areas[slot]);

        for (col, card) in cards.iter().skip(row * columns).take(columns).enumerate() {
            render_card(frame, cell_areas[col], card);
        }
    }
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Search for an artist and press Enter")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(area.height / 2)));
    frame.render_widget(hint, area);
}
