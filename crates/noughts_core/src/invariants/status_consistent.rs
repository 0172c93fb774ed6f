//! Status consistency invariant.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: the stored status equals a fresh evaluation of the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Status matches the board (win before draw)"
    }
}
