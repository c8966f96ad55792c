//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;
use crate::model::CatalogApi;

const PAGE_ROWS: usize = 3;

impl<C: CatalogApi + 'static> AppController<C> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        match key.code {
            KeyCode::Char('c' | 'C' | 'q' | 'Q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.set_should_quit(true).await;
            }
            KeyCode::Enter => {
                self.submit_search().await;
            }
            KeyCode::Esc => {
                model.update_search_query(String::new()).await;
            }
            KeyCode::Backspace => {
                model.backspace_search().await;
            }
            KeyCode::Up => model.scroll_up(1).await,
            KeyCode::Down => model.scroll_down(1).await,
            KeyCode::PageUp => model.scroll_up(PAGE_ROWS).await,
            KeyCode::PageDown => model.scroll_down(PAGE_ROWS).await,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.append_to_search(c).await;
            }
            _ => {}
        }

        Ok(())
    }
}
