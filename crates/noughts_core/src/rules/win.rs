//! Win detection.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows top to bottom, columns
/// left to right, then the `0-4-8` and `2-4-6` diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player owning it.
fn first_match(board: &Board) -> Option<([Position; 3], Player)> {
    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).mark()?;
        (board.get(b).mark() == Some(player) && board.get(c).mark() == Some(player))
            .then_some(([a, b, c], player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first pattern holding three identical
/// marks, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_match(board).map(|(_, player)| player)
}

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_match(board).map(|(line, _)| line)
}
