//! Game state and move application.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A single game: board, turn, status and the moves that produced them.
///
/// Each value is one independent game. Callers own it; nothing is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, O to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success the turn passes to the opponent and the board is
    /// re-evaluated in full; the new status is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::CellOccupied`] if the square already holds a mark.
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            warn!(status = %self.status, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            warn!("Move rejected: square occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.turn;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.turn = player.opponent();
        self.status = rules::evaluate(&self.board);

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );

        match self.status {
            GameStatus::InProgress => debug!(next = %self.turn, "Move applied"),
            status => info!(%status, moves = self.history.len(), "Game finished"),
        }
        Ok(self.status)
    }

    /// Clears the board and starts a new game with O to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous = %self.status, "Resetting game");
        *self = Self::new();
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes on the next legal move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions that would accept a move right now.
    ///
    /// Empty once the game is over, even if squares remain empty.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns true if a move at `position` would be accepted.
    pub fn accepts(&self, position: Position) -> bool {
        !self.status.is_over() && self.board.is_empty(position)
    }

    /// The line that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won(_) => rules::winning_line(&self.board),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, indices: &[usize]) -> Result<GameStatus, MoveError> {
        let mut status = game.status();
        for &i in indices {
            status = game.apply_move(Position::ALL[i])?;
        }
        Ok(status)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_first_move_is_o_then_x() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(game.turn(), Player::X);
        game.apply_move(Position::TopLeft).unwrap();
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]).unwrap();
        // Occupied square after the win still reports GameOver
        assert_eq!(game.apply_move(Position::TopLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winning_line_and_valid_moves_after_win() {
        let mut game = GameState::new();
        assert_eq!(play(&mut game, &[0, 3, 1, 4, 2]), Ok(GameStatus::Won(Player::O)));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(game.valid_moves().is_empty());
        assert!(!game.accepts(Position::BottomRight));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]).unwrap();
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["turn"], "X");
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["history"][0]["position"], "Center");
    }
}
