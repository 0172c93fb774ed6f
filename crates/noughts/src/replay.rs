//! Headless replay of a move list.

use derive_more::{Display, Error};
use noughts_core::{GameState, GameStatus, Move, MoveError, Position, PositionError};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Why a replay stopped before the end of its move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// The index does not name a square.
    #[display("move {}: {}", step + 1, source)]
    InvalidPosition {
        /// Zero-based index into the move list.
        step: usize,
        /// Conversion failure.
        source: PositionError,
    },
    /// The game refused the move.
    #[display("move {}: {}", step + 1, source)]
    Rejected {
        /// Zero-based index into the move list.
        step: usize,
        /// Why the move was refused.
        source: MoveError,
    },
}

/// Result of replaying a move list.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Game after the last accepted move.
    pub state: GameState,
    /// Each accepted move with the status it produced.
    pub steps: Vec<(Move, GameStatus)>,
    /// Set when a move could not be played; later moves were skipped.
    pub error: Option<ReplayError>,
}

/// Plays `moves` on a new game, stopping at the first failure.
#[instrument]
pub fn run(moves: &[usize]) -> Replay {
    let mut state = GameState::new();
    let mut steps = Vec::with_capacity(moves.len());

    for (step, &index) in moves.iter().enumerate() {
        let position = match Position::try_from(index) {
            Ok(position) => position,
            Err(source) => {
                warn!(step, index, "Invalid position in replay");
                return Replay {
                    state,
                    steps,
                    error: Some(ReplayError::InvalidPosition { step, source }),
                };
            }
        };

        let player = state.turn();
        match state.apply_move(position) {
            Ok(status) => steps.push((Move::new(player, position), status)),
            Err(source) => {
                return Replay {
                    state,
                    steps,
                    error: Some(ReplayError::Rejected { step, source }),
                };
            }
        }
    }

    info!(status = %state.status(), moves = steps.len(), "Replay complete");
    Replay {
        state,
        steps,
        error: None,
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    state: &'a GameState,
    announcement: Option<String>,
    error: Option<String>,
}

impl Replay {
    /// Human-readable report: one line per move, the board, then the result.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (mv, status) in &self.steps {
            out.push_str(&format!("{mv}: {status}\n"));
        }
        out.push('\n');
        out.push_str(&self.state.board().to_string());
        out.push_str("\n\n");
        match self.state.status().announcement() {
            Some(message) => out.push_str(&message),
            None => out.push_str(&format!("Player {}'s turn", self.state.turn())),
        }
        out.push('\n');
        out
    }

    /// JSON report with the full game state.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            state: &self.state,
            announcement: self.state.status().announcement(),
            error: self.error.map(|e| e.to_string()),
        })
    }
}
