//! View module - UI rendering
//!
//! - `utils`: Shared helpers (grid math, truncation)
//! - `layout`: Search bar and status line
//! - `cards`: Profile and album cards

mod utils;
mod layout;
mod cards;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ArtistLookup, UiState};

pub struct AppView;

impl AppView {
    /// Cards per grid row for a frame `width` columns wide
    pub fn card_columns(width: u16) -> usize {
        utils::card_columns(width)
    }

    pub fn render(frame: &mut Frame, ui_state: &UiState, results: Option<&ArtistLookup>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state);

        match results {
            Some(lookup) => cards::render_cards(frame, chunks[1], lookup, ui_state.scroll_row),
            None => cards::render_empty(frame, chunks[1]),
        }

        layout::render_status_bar(frame, chunks[2], results);
    }
}
