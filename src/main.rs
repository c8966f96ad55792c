mod auth;
mod config;
mod controller;
mod logging;
mod model;
mod view;

#[cfg(test)]
mod test_support;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use auth::TokenProvider;
use config::{AppConfig, UI_POLL_INTERVAL};
use controller::AppController;
use model::{AppModel, SpotifyCatalog};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== artist-lookup starting ===");

    let config = AppConfig::from_env()?;
    let catalog = Arc::new(SpotifyCatalog::new(config.credentials));
    let tokens = TokenProvider::new(catalog.clone());

    // Searches do not wait for the token; one issued before it arrives is skipped.
    let tokens_for_init = tokens.clone();
    tokio::spawn(async move {
        tokens_for_init.acquire().await;
    });

    let model = AppModel::new();
    let controller = AppController::new(model.clone(), catalog, tokens);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("artist-lookup shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: AppModel,
    controller: AppController<SpotifyCatalog>,
) -> Result<()> {
    loop {
        let width = terminal.size()?.width;
        model.set_card_columns(AppView::card_columns(width)).await;

        let ui_state = model.get_ui_state().await;
        let results = model.results().await;

        terminal.draw(|f| {
            AppView::render(f, &ui_state, results.as_ref());
        })?;

        if event::poll(UI_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await?;
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
