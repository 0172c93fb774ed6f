//! Core domain types for noughts and crosses.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, also used as the mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player O (moves first).
    O,
    /// Player X (moves second).
    X,
}

impl Player {
    /// The player who moves first after every reset.
    pub const FIRST: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square marked by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Number of squares holding a mark.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended with a completed line.
    #[display("Won by {_0}")]
    Won(Player),
    /// Board filled without a completed line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Message announcing the result, or `None` while the game is running.
    #[instrument]
    pub fn announcement(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("Player [{}] Won the Game...", player)),
            GameStatus::Draw => Some("It's a Draw!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::FIRST, Player::O);
    }

    #[test]
    fn test_board_display_shows_keys_for_empty_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_occupied_count() {
        let mut board = Board::new();
        assert_eq!(board.occupied(), 0);
        board.set(Position::BottomRight, Square::Occupied(Player::X));
        assert_eq!(board.occupied(), 1);
        assert_eq!(board.get(Position::BottomRight).mark(), Some(Player::X));
    }

    #[test]
    fn test_announcements() {
        assert_eq!(GameStatus::InProgress.announcement(), None);
        assert_eq!(
            GameStatus::Won(Player::O).announcement().as_deref(),
            Some("Player [O] Won the Game...")
        );
        assert_eq!(
            GameStatus::Draw.announcement().as_deref(),
            Some("It's a Draw!")
        );
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Won(Player::X).winner(), Some(Player::X));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Won by X");
    }
}
