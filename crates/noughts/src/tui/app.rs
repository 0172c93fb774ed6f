//! Application state and logic.

use super::input::{self, Command};
use crate::config::UiConfig;
use crossterm::event::KeyCode;
use noughts_core::{GameEvent, GameState, Player, Position, Session};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    status_message: String,
    settings: UiConfig,
    should_quit: bool,
}

impl App {
    /// Creates the app and the channel its session publishes events on.
    pub fn new(settings: UiConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut session = Session::new();
        session.subscribe(move |event: &GameEvent| {
            if event_tx.send(*event).is_err() {
                debug!("Event receiver dropped");
            }
        });

        let app = Self {
            session,
            cursor: Position::Center,
            status_message: turn_message(Player::FIRST),
            settings,
            should_quit: false,
        };
        (app, event_rx)
    }

    /// The game being displayed.
    pub fn game(&self) -> &GameState {
        self.session.state()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// UI settings.
    pub fn settings(&self) -> &UiConfig {
        &self.settings
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// A square can be played only while empty and the game is running.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.game().accepts(pos)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = input::command_for(key) else {
            return;
        };
        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => {
                self.session.reset();
                self.cursor = Position::Center;
            }
            Command::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::PlayCursor => self.play(self.cursor),
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
        }
    }

    /// Disabled squares are refused here and never reach the game.
    fn play(&mut self, pos: Position) {
        if !self.is_enabled(pos) {
            self.status_message = if self.game().status().is_over() {
                "Game over. Press R for a new game.".to_string()
            } else {
                format!("{} is taken. Player {}'s turn.", pos.label(), self.game().turn())
            };
            return;
        }
        if let Err(e) = self.session.apply_move(pos) {
            warn!(error = %e, "Move rejected");
            self.status_message = format!("Move error: {}", e);
        }
    }

    /// Handles an event published by the session.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MoveApplied { mv, status } => {
                self.status_message = status.announcement().unwrap_or_else(|| {
                    format!(
                        "{} played {}. {}",
                        mv.player,
                        mv.position.label(),
                        turn_message(mv.player.opponent())
                    )
                });
            }
            GameEvent::Reset => {
                self.status_message = format!("New game. {}", turn_message(Player::FIRST));
            }
        }
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn.", player)
}
