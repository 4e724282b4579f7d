use crate::config::Config;
use crate::logger::Logger;
use crate::storage::TagStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Open the store, run the event loop until quit, then release the terminal
/// and the store on every exit path.
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    let store = TagStore::open(&config.database.path)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.path.display()))?;
    logger.log(format!("Storage: Opened {}", store.url()));

    let mouse_enabled = config.ui.mouse_enabled;
    let mut terminal = match setup_terminal(mouse_enabled) {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore_err) = restore_terminal_modes() {
                log::error!("Failed to restore terminal after setup error: {:#}", restore_err);
            }
            if let Err(close_err) = store.close().await {
                log::error!("Failed to close store after terminal setup error: {:#}", close_err);
            }
            return Err(e);
        }
    };

    let mut app = AppComponent::new(store, config.ui.clone(), logger);
    let mut event_handler = EventHandler::new();

    app.load().await;
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    let restore_result = restore_terminal(&mut terminal, mouse_enabled);
    let shutdown_result = app.shutdown().await;

    result?;
    restore_result?;
    shutdown_result
}

fn setup_terminal(mouse_enabled: bool) -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal_modes() -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mouse_enabled: bool) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await;
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {
                // Nothing changes between input events
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
