//! Campaign TUI - Terminal User Interface for campaign drafting
//!
//! A Ratatui-based form for drafting a marketing campaign, with debounced
//! auto-save of the draft, CSV bootstrap import, and validated submission.

mod app;
mod config;
mod import;
mod platform;
mod state;
mod storage;
mod submit;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use storage::FileStore;
use submit::FileSubmitter;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        warn!("using default config: {err:#}");
        AppConfig::default()
    });
    let data_dir = config.data_dir()?;
    let store = FileStore::new(data_dir.clone());
    let submitter = FileSubmitter::new(data_dir.join("submissions.jsonl"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, Box::new(store), Box::new(submitter));
    let result = run_app(&mut terminal, &mut app).await;

    // No auto-save may fire past this point
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Wait for input, but never past a pending auto-save deadline
        let poll_duration = app.next_poll_timeout();

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    // Handle key event
                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Redrawn with fresh dimensions on the next loop pass
                }
                _ => {}
            }
        }

        // Fire due timers and expire toasts
        app.on_tick();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
