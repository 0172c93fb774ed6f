//! Terminal UI.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::GameEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::config::UiConfig;
use app::App;

/// Runs the terminal UI until the user quits.
pub async fn run(settings: UiConfig) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut event_rx) = App::new(settings);
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let input = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let res = run_app(&mut terminal, &mut app, &mut key_rx, &mut event_rx).await;

    // Closing the channel stops the input task
    drop(key_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match input.await {
        Ok(Err(e)) => error!(error = %e, "Input reader failed"),
        Err(e) => error!(error = %e, "Input task panicked"),
        Ok(Ok(())) => debug!("Input reader stopped"),
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Redraws after every key press or game event.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    key_rx: &mut mpsc::UnboundedReceiver<KeyCode>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::select! {
            key = key_rx.recv() => match key {
                Some(key) => app.handle_key(key),
                None => anyhow::bail!("Input channel closed"),
            },
            Some(event) = event_rx.recv() => app.handle_event(event),
        }
    }
}

/// Blocking loop forwarding key presses until the receiver is dropped.
fn read_keys(key_tx: mpsc::UnboundedSender<KeyCode>) -> Result<()> {
    while !key_tx.is_closed() {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && key_tx.send(key.code).is_err()
        {
            break;
        }
    }
    Ok(())
}
