//! Game rules.
//!
//! Pure functions over a [`Board`]. The full terminal-condition check runs
//! after every move; nothing is cached between moves.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board: a completed line wins, otherwise a full board draws.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(marks.chars()) {
            match c {
                'O' => board.set(pos, Square::Occupied(Player::O)),
                'X' => board.set(pos, Square::Occupied(Player::X)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(evaluate(&board_from("OX.......")), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_on_full_board_beats_draw() {
        // O completes the left column on the ninth mark
        assert_eq!(evaluate(&board_from("OXXOOXOXO")), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_evaluate_draw() {
        assert_eq!(evaluate(&board_from("OXOOXXXOO")), GameStatus::Draw);
    }
}
