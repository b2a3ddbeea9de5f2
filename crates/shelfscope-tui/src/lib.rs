pub mod app;
pub mod event;
pub mod keys;
pub mod popup;
pub mod theme;
pub mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use shelfscope_api::Catalog;
use shelfscope_core::{AppConfig, FavoritesStore};
use tokio::runtime::Handle;
use tracing::{info, warn};

use app::async_tasks::Loader;
use app::{App, NotificationLevel};
use event::{AppEvent, EventHandler};

/// Where the TUI starts.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Open this list key on top of the genre list right away.
    pub initial_genre: Option<String>,
}

/// Run the full TUI application.
///
/// Blocks the calling thread. Loads are spawned onto `handle`, so it must not
/// be called from inside that runtime's own worker.
pub fn run_tui(
    config: AppConfig,
    catalog: Arc<Catalog>,
    favorites: Arc<FavoritesStore>,
    handle: Handle,
    options: LaunchOptions,
) -> Result<()> {
    let (mut events, tx) = EventHandler::new(Duration::from_millis(config.ui.tick_ms));
    let mut app = App::new(config, favorites).with_loader(Loader { catalog, handle, tx });
    app.start();
    if let Some(key) = options.initial_genre {
        app.open_books(key, None);
    }

    // Install panic hook
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut app, &mut events);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    info!(favorites = app.favorites.len(), "tui session ended");
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => keys::handle_key(app, key.code, key.modifiers),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {}
            AppEvent::AsyncResult(result) => app.handle_async(result),
        }
        app.tick();

        if let Some(url) = app.pending_open_url.take() {
            if let Err(e) = open::that_detached(&url) {
                warn!(error = %e, "failed to open purchase link");
                app.notify(NotificationLevel::Error, "Could not open the purchase link");
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
