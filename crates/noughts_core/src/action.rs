//! Moves and move errors.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
///
/// Applied moves are kept in the game's history and carried by
/// [`GameEvent::MoveApplied`](crate::GameEvent::MoveApplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{player} -> {}", position.label())]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Error returned when a move is rejected. The game is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position already holds a mark.
    #[display("{} is already occupied", _0.label())]
    CellOccupied(#[error(not(source))] Position),

    /// The game has been won or drawn; reset before playing again.
    #[display("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::X, Position::Center);
        assert_eq!(mv.to_string(), "X -> Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Position::TopLeft).to_string(),
            "Top-left is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
