//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::types::{ArtistLookup, UiState};

/// Committed search output plus the generation that may replace it
#[derive(Default)]
struct SearchState {
    generation: u64,
    lookup: Option<ArtistLookup>,
}

/// Main application model containing all state
#[derive(Clone, Default)]
pub struct AppModel {
    ui_state: Arc<Mutex<UiState>>,
    search: Arc<Mutex<SearchState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    /// Starts a new search round and returns its generation. Results of any
    /// older round can no longer be committed.
    pub async fn begin_search(&self) -> u64 {
        let generation = {
            let mut search = self.search.lock().await;
            search.generation += 1;
            search.generation
        };
        self.ui_state.lock().await.is_loading = true;
        generation
    }

    /// Replaces profile and albums in one step if `generation` is still the
    /// latest round. Returns whether the lookup was committed.
    pub async fn commit_results(&self, generation: u64, lookup: ArtistLookup) -> bool {
        {
            let mut search = self.search.lock().await;
            if search.generation != generation {
                tracing::debug!(generation, latest = search.generation, "Discarding stale search results");
                return false;
            }
            search.lookup = Some(lookup);
        }

        let mut state = self.ui_state.lock().await;
        state.is_loading = false;
        state.scroll_row = 0;
        true
    }

    /// Ends a round that produced nothing to commit.
    pub async fn finish_search(&self, generation: u64) {
        let current = self.search.lock().await.generation == generation;
        if current {
            self.ui_state.lock().await.is_loading = false;
        }
    }

    pub async fn results(&self) -> Option<ArtistLookup> {
        self.search.lock().await.lookup.clone()
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn search_query(&self) -> String {
        self.ui_state.lock().await.search_query.clone()
    }

    pub async fn update_search_query(&self, query: String) {
        self.ui_state.lock().await.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        self.ui_state.lock().await.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        self.ui_state.lock().await.search_query.pop();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    pub async fn scroll_up(&self, rows: usize) {
        let mut state = self.ui_state.lock().await;
        state.scroll_row = state.scroll_row.saturating_sub(rows);
    }

    /// Bounded by the last card row at the current column count.
    pub async fn scroll_down(&self, rows: usize) {
        let cards = self.card_count().await;

        let mut state = self.ui_state.lock().await;
        let last_row = last_row(cards, state.card_columns);
        state.scroll_row = state.scroll_row.saturating_add(rows).min(last_row);
    }

    /// Records the grid width of the frame about to be drawn, pulling the
    /// scroll offset back if the grid now has fewer rows.
    pub async fn set_card_columns(&self, columns: usize) {
        let cards = self.card_count().await;

        let mut state = self.ui_state.lock().await;
        state.card_columns = columns;
        state.scroll_row = state.scroll_row.min(last_row(cards, columns));
    }

    async fn card_count(&self) -> usize {
        self.search
            .lock()
            .await
            .lookup
            .as_ref()
            .map_or(0, |lookup| lookup.albums.len() + 1)
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

fn last_row(cards: usize, columns: usize) -> usize {
    cards.div_ceil(columns.max(1)).saturating_sub(1)
}
